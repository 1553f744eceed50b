//! Type R (Pt-13%Rh / Pt) reference functions.
//!
//! The negative thermoelement is the platinum reference itself, so its leg
//! tables are identically zero.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            0.000000000000e0,
            5.289617297650e0,
            1.391665897820e-2,
            -2.388556930170e-5,
            3.569160010630e-8,
            -4.623476662980e-11,
            5.007774410340e-14,
            -3.731058861910e-17,
            1.577164823670e-20,
            -2.810386252510e-24,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            2.951579253160e3,
            -2.520612513320e0,
            1.595645018650e-2,
            -7.640859475760e-6,
            2.053052910240e-9,
            -2.933596681730e-13,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            1.522321182090e5,
            -2.688198885450e2,
            1.712802804710e-1,
            -3.458957064530e-5,
            -9.346339710460e-12,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -226.0,
        1923.0,
        &[
            0.000000000000e0,
            1.889138000000e-1,
            -9.383529000000e-5,
            1.306861900000e-7,
            -2.270358000000e-10,
            3.514565900000e-13,
            -3.895390000000e-16,
            2.823947100000e-19,
            -1.260728100000e-22,
            3.135361100000e-26,
            -3.318776900000e-30,
        ],
    ),
    Segment::new(
        1923.0,
        13228.0,
        &[
            1.334584505000e1,
            1.472644573000e-1,
            -1.844024844000e-5,
            4.031129726000e-9,
            -6.249428360000e-13,
            6.468412046000e-17,
            -4.458750426000e-21,
            1.994710149000e-25,
            -5.313401790000e-30,
            6.481976217000e-35,
        ],
    ),
    Segment::new(
        11361.0,
        19739.0,
        &[
            -8.199599416000e1,
            1.553962042000e-1,
            -8.342197663000e-6,
            4.279433549000e-10,
            -1.191577910000e-14,
            1.492290091000e-19,
        ],
    ),
    Segment::new(
        19739.0,
        21103.0,
        &[
            3.406177836000e4,
            -7.023729171000e0,
            5.582903813000e-4,
            -1.952394635000e-8,
            2.560740231000e-13,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            5.289617297650e0,
            2.783331795640e-2,
            -7.165670790510e-5,
            1.427664004250e-7,
            -2.311738331490e-10,
            3.004664646200e-13,
            -2.611741203340e-16,
            1.261731858940e-19,
            -2.529347627260e-23,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            -2.520612513320e0,
            3.191290037300e-2,
            -2.292257842730e-5,
            8.212211640960e-9,
            -1.466798340870e-12,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            -2.688198885450e2,
            3.425605609420e-1,
            -1.037687119360e-4,
            -3.738535884180e-11,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            2.783331795640e-2,
            -1.433134158100e-4,
            4.282992012750e-7,
            -9.246953325960e-10,
            1.502332323100e-12,
            -1.567044722000e-15,
            8.832123012580e-19,
            -2.023478101810e-22,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            3.191290037300e-2,
            -4.584515685460e-5,
            2.463663492290e-8,
            -5.867193363480e-12,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            3.425605609420e-1,
            -2.075374238720e-4,
            -1.121560765250e-10,
        ],
    ),
];

/// Positive thermoelement versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            0.000000000000e0,
            5.289617297650e0,
            1.391665897820e-2,
            -2.388556930170e-5,
            3.569160010630e-8,
            -4.623476662980e-11,
            5.007774410340e-14,
            -3.731058861910e-17,
            1.577164823670e-20,
            -2.810386252510e-24,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            2.951579253160e3,
            -2.520612513320e0,
            1.595645018650e-2,
            -7.640859475760e-6,
            2.053052910240e-9,
            -2.933596681730e-13,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            1.522321182090e5,
            -2.688198885450e2,
            1.712802804710e-1,
            -3.458957064530e-5,
            -9.346339710460e-12,
        ],
    ),
];

/// Negative thermoelement versus platinum, °C to µV.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -50.0,
        1768.1,
        &[
            0.000000000000e0,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            5.289617297650e0,
            2.783331795640e-2,
            -7.165670790510e-5,
            1.427664004250e-7,
            -2.311738331490e-10,
            3.004664646200e-13,
            -2.611741203340e-16,
            1.261731858940e-19,
            -2.529347627260e-23,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            -2.520612513320e0,
            3.191290037300e-2,
            -2.292257842730e-5,
            8.212211640960e-9,
            -1.466798340870e-12,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            -2.688198885450e2,
            3.425605609420e-1,
            -1.037687119360e-4,
            -3.738535884180e-11,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1768.1,
        &[
            0.000000000000e0,
        ],
    ),
];
