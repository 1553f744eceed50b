//! Type J (Fe / Cu-Ni) reference functions.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            0.000000000000e0,
            5.038118781500e1,
            3.047583693000e-2,
            -8.568106572000e-5,
            1.322819529500e-7,
            -1.705295833700e-10,
            2.094809069700e-13,
            -1.253839533600e-16,
            1.563172569700e-20,
        ],
    ),
    Segment::new(
        760.0,
        1200.0,
        &[
            2.964562568100e5,
            -1.497612778600e3,
            3.178710392400e0,
            -3.184768670100e-3,
            1.572081900400e-6,
            -3.069136905600e-10,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -8095.0,
        0.0,
        &[
            0.000000000000e0,
            1.952826800000e-2,
            -1.228618500000e-6,
            -1.075217800000e-9,
            -5.908693300000e-13,
            -1.725671300000e-16,
            -2.813151300000e-20,
            -2.396337000000e-24,
            -8.382332100000e-29,
        ],
    ),
    Segment::new(
        0.0,
        42919.0,
        &[
            0.000000000000e0,
            1.978425000000e-2,
            -2.001204000000e-7,
            1.036969000000e-11,
            -2.549687000000e-16,
            3.585153000000e-21,
            -5.344285000000e-26,
            5.099890000000e-31,
        ],
    ),
    Segment::new(
        42919.0,
        69553.0,
        &[
            -3.113581870000e3,
            3.005436840000e-1,
            -9.947732300000e-6,
            1.702766300000e-10,
            -1.430334680000e-15,
            4.738860840000e-21,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            5.038118781500e1,
            6.095167386000e-2,
            -2.570431971600e-4,
            5.291278118000e-7,
            -8.526479168500e-10,
            1.256885441820e-12,
            -8.776876735200e-16,
            1.250538055760e-19,
        ],
    ),
    Segment::new(
        760.0,
        1200.0,
        &[
            -1.497612778600e3,
            6.357420784800e0,
            -9.554306010300e-3,
            6.288327601600e-6,
            -1.534568452800e-9,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            6.095167386000e-2,
            -5.140863943200e-4,
            1.587383435400e-6,
            -3.410591667400e-9,
            6.284427209100e-12,
            -5.266126041120e-15,
            8.753766390320e-19,
        ],
    ),
    Segment::new(
        760.0,
        1200.0,
        &[
            6.357420784800e0,
            -1.910861202060e-2,
            1.886498280480e-5,
            -6.138273811200e-9,
        ],
    ),
];

/// Positive thermoelement versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            0.000000000000e0,
            1.791354855900e1,
            4.677466335800e-3,
            -7.122599299100e-5,
            1.335212501600e-7,
            -1.500896263900e-10,
            1.551431962500e-13,
            -7.950357212500e-17,
            2.429790391000e-21,
        ],
    ),
];

/// Negative thermoelement versus platinum, °C to µV.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            0.000000000000e0,
            3.246763925600e1,
            2.579837059400e-2,
            -1.445507273000e-5,
            -1.239297209300e-9,
            -2.043995698000e-11,
            5.433771071800e-14,
            -4.588038123500e-17,
            1.320193530600e-20,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            1.791354855900e1,
            9.354932671600e-3,
            -2.136779789730e-4,
            5.340850006400e-7,
            -7.504481319500e-10,
            9.308591775000e-13,
            -5.565250048750e-16,
            1.943832312800e-20,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -210.0,
        760.0,
        &[
            3.246763925600e1,
            5.159674118800e-2,
            -4.336521819000e-5,
            -4.957188837200e-9,
            -1.021997849000e-10,
            3.260262643080e-13,
            -3.211626686450e-16,
            1.056154824480e-19,
        ],
    ),
];
