//! Type T (Cu / Cu-Ni) reference functions.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            3.874810636400e1,
            4.419443434700e-2,
            1.184432310500e-4,
            2.003297355400e-5,
            9.013801955900e-7,
            2.265115659300e-8,
            3.607115420500e-10,
            3.849393988300e-12,
            2.821352192500e-14,
            1.425159477900e-16,
            4.876866228600e-19,
            1.079553927000e-21,
            1.394502706200e-24,
            7.979515392700e-28,
        ],
    ),
    Segment::new(
        0.0,
        400.0,
        &[
            0.000000000000e0,
            3.874810636400e1,
            3.329222788000e-2,
            2.061824340400e-4,
            -2.188225684600e-6,
            1.099688092800e-8,
            -3.081575877200e-11,
            4.547913529000e-14,
            -2.751290167300e-17,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -5603.0,
        0.0,
        &[
            0.000000000000e0,
            2.594919200000e-2,
            -2.131696700000e-7,
            7.901869200000e-10,
            4.252777700000e-13,
            1.330447300000e-16,
            2.024144600000e-20,
            1.266817100000e-24,
        ],
    ),
    Segment::new(
        0.0,
        20872.0,
        &[
            0.000000000000e0,
            2.592800000000e-2,
            -7.602961000000e-7,
            4.637791000000e-11,
            -2.165394000000e-15,
            6.048144000000e-20,
            -7.293422000000e-25,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            3.874810636400e1,
            8.838886869400e-2,
            3.553296931500e-4,
            8.013189421600e-5,
            4.506900977950e-6,
            1.359069395580e-7,
            2.524980794350e-9,
            3.079515190640e-11,
            2.539216973250e-13,
            1.425159477900e-15,
            5.364552851460e-18,
            1.295464712400e-20,
            1.812853518060e-23,
            1.117132154980e-26,
        ],
    ),
    Segment::new(
        0.0,
        400.0,
        &[
            3.874810636400e1,
            6.658445576000e-2,
            6.185473021200e-4,
            -8.752902738400e-6,
            5.498440464000e-8,
            -1.848945526320e-10,
            3.183539470300e-13,
            -2.201032133840e-16,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            8.838886869400e-2,
            7.106593863000e-4,
            2.403956826480e-4,
            1.802760391180e-5,
            6.795346977900e-7,
            1.514988476610e-8,
            2.155660633450e-10,
            2.031373578600e-12,
            1.282643530110e-14,
            5.364552851460e-17,
            1.425011183640e-19,
            2.175424221670e-22,
            1.452271801470e-25,
        ],
    ),
    Segment::new(
        0.0,
        400.0,
        &[
            6.658445576000e-2,
            1.237094604240e-3,
            -2.625870821520e-5,
            2.199376185600e-7,
            -9.244727631600e-10,
            1.910123682180e-12,
            -1.540722493690e-15,
        ],
    ),
];

/// Positive thermoelement versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            5.894548229700e0,
            2.177354516700e-2,
            2.826751733100e-4,
            2.256129063200e-5,
            9.502026902000e-7,
            2.412716823300e-8,
            3.910747567800e-10,
            4.217403476600e-12,
            3.094671890400e-14,
            1.551930033900e-16,
            5.235860991100e-19,
            1.136383791300e-21,
            1.433054079200e-24,
            7.979515392700e-28,
        ],
    ),
    Segment::new(
        0.0,
        400.0,
        &[
            0.000000000000e0,
            5.894548226500e0,
            1.509134765200e-2,
            1.385988324200e-4,
            -1.827351164900e-6,
            1.033635649100e-8,
            -3.065826553400e-11,
            4.681530823500e-14,
            -2.974071681200e-17,
            1.474503431300e-21,
            -3.659405308700e-25,
        ],
    ),
];

/// Negative thermoelement versus platinum, °C to µV.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            3.285355813430e1,
            2.242088918000e-2,
            -1.642319422600e-4,
            -2.528317078000e-6,
            -4.882249461000e-8,
            -1.476011640000e-9,
            -3.036321473000e-11,
            -3.680094883000e-13,
            -2.733196979000e-15,
            -1.267705560000e-17,
            -3.589947625000e-20,
            -5.682986430000e-23,
            -3.855137300000e-26,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            0.000000000000e0,
            3.285355813800e1,
            1.820088022700e-2,
            6.758360162400e-5,
            -3.608745197500e-7,
            6.605244362300e-10,
            -1.574932377100e-13,
            -1.336172944200e-15,
            2.227815139100e-18,
            -1.474503431300e-21,
            3.659405308700e-25,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            5.894548229700e0,
            4.354709033400e-2,
            8.480255199300e-4,
            9.024516252800e-5,
            4.751013451000e-6,
            1.447630093980e-7,
            2.737523297460e-9,
            3.373922781280e-11,
            2.785204701360e-13,
            1.551930033900e-15,
            5.759447090210e-18,
            1.363660549560e-20,
            1.862970302960e-23,
            1.117132154980e-26,
        ],
    ),
    Segment::new(
        0.0,
        400.0,
        &[
            5.894548226500e0,
            3.018269530400e-2,
            4.157964972600e-4,
            -7.309404659600e-6,
            5.168178245500e-8,
            -1.839495932040e-10,
            3.277071576450e-13,
            -2.379257344960e-16,
            1.327053088170e-20,
            -3.659405308700e-24,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            3.285355813430e1,
            4.484177836000e-2,
            -4.926958267800e-4,
            -1.011326831200e-5,
            -2.441124730500e-7,
            -8.856069840000e-9,
            -2.125425031100e-10,
            -2.944075906400e-12,
            -2.459877281100e-14,
            -1.267705560000e-16,
            -3.948942387500e-19,
            -6.819583716000e-22,
            -5.011678490000e-25,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            3.285355813800e1,
            3.640176045400e-2,
            2.027508048720e-4,
            -1.443498079000e-6,
            3.302622181150e-9,
            -9.449594262600e-13,
            -9.353210609400e-15,
            1.782252111280e-17,
            -1.327053088170e-20,
            3.659405308700e-24,
        ],
    ),
];
