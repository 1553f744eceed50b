//! Type B (Pt-30%Rh / Pt-6%Rh) reference functions.
//!
//! The inverse function is only published from 250 °C upwards; below that the
//! EMF is too flat to invert.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            0.000000000000e0,
            -2.465081834600e-1,
            5.904042117100e-3,
            -1.325793163600e-6,
            1.566829190100e-9,
            -1.694452924000e-12,
            6.299034709400e-16,
        ],
    ),
    Segment::new(
        630.615,
        1820.0,
        &[
            -3.893816862100e3,
            2.857174747000e1,
            -8.488510478500e-2,
            1.578528016400e-4,
            -1.683534486400e-7,
            1.110979401300e-10,
            -4.451543103300e-14,
            9.897564082100e-18,
            -9.379133028900e-22,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        291.0,
        2431.0,
        &[
            9.842332100000e1,
            6.997150000000e-1,
            -8.476530400000e-4,
            1.005264400000e-6,
            -8.334595200000e-10,
            4.550854200000e-13,
            -1.552303700000e-16,
            2.988675000000e-20,
            -2.474286000000e-24,
        ],
    ),
    Segment::new(
        2431.0,
        13820.0,
        &[
            2.131507100000e2,
            2.851050400000e-1,
            -5.274288700000e-5,
            9.916080400000e-9,
            -1.296530300000e-12,
            1.119587000000e-16,
            -6.062519900000e-21,
            1.866169600000e-25,
            -2.487858500000e-30,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            -2.465081834600e-1,
            1.180808423420e-2,
            -3.977379490800e-6,
            6.267316760400e-9,
            -8.472264620000e-12,
            3.779420825640e-15,
        ],
    ),
    Segment::new(
        630.615,
        1820.0,
        &[
            2.857174747000e1,
            -1.697702095700e-1,
            4.735584049200e-4,
            -6.734137945600e-7,
            5.554897006500e-10,
            -2.670925861980e-13,
            6.928294857470e-17,
            -7.503306423120e-21,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            1.180808423420e-2,
            -7.954758981600e-6,
            1.880195028120e-8,
            -3.388905848000e-11,
            1.889710412820e-14,
        ],
    ),
    Segment::new(
        630.615,
        1820.0,
        &[
            -1.697702095700e-1,
            9.471168098400e-4,
            -2.020241383680e-6,
            2.221958802600e-9,
            -1.335462930990e-12,
            4.156976914480e-16,
            -5.252314496180e-20,
        ],
    ),
];

/// Positive thermoelement versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            0.000000000000e0,
            4.822787568700e0,
            1.565116570900e-2,
            -2.223379788200e-5,
            2.833324407400e-8,
            -2.025894044700e-11,
            6.148870509600e-15,
        ],
    ),
    Segment::new(
        630.615,
        1768.1,
        &[
            -7.968043228200e3,
            6.394111021300e1,
            -1.710242141000e-1,
            3.055578252700e-4,
            -3.210574449200e-7,
            2.090910279400e-10,
            -8.233582542600e-14,
            1.782284151500e-17,
            -1.618707418700e-21,
        ],
    ),
];

/// Negative thermoelement versus platinum, °C to µV.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            0.000000000000e0,
            5.069295752200e0,
            9.747123591900e-3,
            -2.090800471840e-5,
            2.676641488300e-8,
            -1.856448752300e-11,
            5.518967038600e-15,
        ],
    ),
    Segment::new(
        630.615,
        1768.1,
        &[
            -4.074226366200e3,
            3.536936274300e1,
            -8.613910931500e-2,
            1.477050236200e-4,
            -1.527039962900e-7,
            9.799308781000e-11,
            -3.782039439300e-14,
            7.925277432800e-18,
            -6.807941157800e-22,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            4.822787568700e0,
            3.130233141800e-2,
            -6.670139364600e-5,
            1.133329762960e-7,
            -1.012947022350e-10,
            3.689322305760e-14,
        ],
    ),
    Segment::new(
        630.615,
        1768.1,
        &[
            6.394111021300e1,
            -3.420484282000e-1,
            9.166734758100e-4,
            -1.284229779680e-6,
            1.045455139700e-9,
            -4.940149525560e-13,
            1.247598906050e-16,
            -1.294965934960e-20,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        0.0,
        630.615,
        &[
            5.069295752200e0,
            1.949424718380e-2,
            -6.272401415520e-5,
            1.070656595320e-7,
            -9.282243761500e-11,
            3.311380223160e-14,
        ],
    ),
    Segment::new(
        630.615,
        1768.1,
        &[
            3.536936274300e1,
            -1.722782186300e-1,
            4.431150708600e-4,
            -6.108159851600e-7,
            4.899654390500e-10,
            -2.269223663580e-13,
            5.547694202960e-17,
            -5.446352926240e-21,
        ],
    ),
];
