//! Type E (Ni-Cr / Cu-Ni) reference functions.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            5.866550870800e1,
            4.541097712400e-2,
            -7.799804868600e-4,
            -2.580016084300e-5,
            -5.945258305700e-7,
            -9.321405866700e-9,
            -1.028760553400e-10,
            -8.037012362100e-13,
            -4.397949739100e-15,
            -1.641477635500e-17,
            -3.967361951600e-20,
            -5.582732872100e-23,
            -3.465784201300e-26,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            0.000000000000e0,
            5.866550871000e1,
            4.503227558200e-2,
            2.890840721200e-5,
            -3.305689665200e-7,
            6.502440327000e-10,
            -1.919749550400e-13,
            -1.253660049700e-15,
            2.148921756900e-18,
            -1.438804178200e-21,
            3.596089948100e-25,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -8825.0,
        0.0,
        &[
            0.000000000000e0,
            1.697728800000e-2,
            -4.351497000000e-7,
            -1.585969700000e-10,
            -9.250287100000e-14,
            -2.608431400000e-17,
            -4.136019900000e-21,
            -3.403403000000e-25,
            -1.156489000000e-29,
        ],
    ),
    Segment::new(
        0.0,
        76373.0,
        &[
            0.000000000000e0,
            1.705703500000e-2,
            -2.330175900000e-7,
            6.543558500000e-12,
            -7.356274900000e-17,
            -1.789600100000e-21,
            8.403616500000e-26,
            -1.373587900000e-30,
            1.062982300000e-35,
            -3.244708700000e-41,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            5.866550870800e1,
            9.082195424800e-2,
            -2.339941460580e-3,
            -1.032006433720e-4,
            -2.972629152850e-6,
            -5.592843520020e-8,
            -7.201323873800e-10,
            -6.429609889680e-12,
            -3.958154765190e-14,
            -1.641477635500e-16,
            -4.364098146760e-19,
            -6.699279446520e-22,
            -4.505519461690e-25,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            5.866550871000e1,
            9.006455116400e-2,
            8.672522163600e-5,
            -1.322275866080e-6,
            3.251220163500e-9,
            -1.151849730240e-12,
            -8.775620347900e-15,
            1.719137405520e-17,
            -1.294923760380e-20,
            3.596089948100e-24,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            9.082195424800e-2,
            -4.679882921160e-3,
            -3.096019301160e-4,
            -1.189051661140e-5,
            -2.796421760010e-7,
            -4.320794324280e-9,
            -4.500726922780e-11,
            -3.166523812150e-13,
            -1.477329871950e-15,
            -4.364098146760e-18,
            -7.369207391170e-21,
            -5.406623354030e-24,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            9.006455116400e-2,
            1.734504432720e-4,
            -3.966827598240e-6,
            1.300488065400e-8,
            -5.759248651200e-12,
            -5.265372208740e-14,
            1.203396183860e-16,
            -1.035939008300e-19,
            3.236480953290e-23,
        ],
    ),
];

/// Positive thermoelement (Ni-Cr) versus platinum, °C to µV. Shared with
/// type K.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            2.581195057370e1,
            2.299008794400e-2,
            -6.157485446000e-4,
            -2.327184376500e-5,
            -5.457033359600e-7,
            -7.845394226700e-9,
            -7.251284061000e-11,
            -4.356917479100e-13,
            -1.664752760100e-15,
            -3.737720755000e-18,
            -3.774143266000e-21,
            1.002535579000e-24,
            3.893530987000e-27,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            0.000000000000e0,
            2.581195057200e1,
            2.683139535500e-2,
            -3.867519441200e-5,
            3.030555323000e-8,
            -1.028040353000e-11,
            -3.448171733000e-14,
            8.251289450000e-17,
            -7.889338220000e-20,
            3.569925310000e-23,
            -6.331536060000e-27,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            2.581195057370e1,
            4.598017588800e-2,
            -1.847245633800e-3,
            -9.308737506000e-5,
            -2.728516679800e-6,
            -4.707236536020e-8,
            -5.075898842700e-10,
            -3.485533983280e-12,
            -1.498277484090e-14,
            -3.737720755000e-17,
            -4.151557592600e-20,
            1.203042694800e-23,
            5.061590283100e-26,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            2.581195057200e1,
            5.366279071000e-2,
            -1.160255832360e-4,
            1.212222129200e-7,
            -5.140201765000e-11,
            -2.068903039800e-13,
            5.775902615000e-16,
            -6.311470576000e-19,
            3.212932779000e-22,
            -6.331536060000e-26,
        ],
    ),
];

/// Negative thermoelement (Cu-Ni), platinum versus element, °C to µV. The
/// same alloy as the type T negative leg.
pub const NEGATIVE_LEG_EMF: &[Segment] = super::type_t::NEGATIVE_LEG_EMF;

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = super::type_t::NEGATIVE_LEG_SEEBECK;
