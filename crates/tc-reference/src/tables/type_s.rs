//! Type S (Pt-10%Rh / Pt) reference functions.
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
            5.403133086310e0,
            1.259342897400e-2,
            -2.324779686890e-5,
            3.220288230360e-8,
            -3.314651963890e-11,
            2.557442517860e-14,
            -1.250688713930e-17,
            2.714431761450e-21,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            1.329004440850e3,
            3.345093113440e0,
            6.548051928180e-3,
            -1.648562592090e-6,
            1.299896051740e-11,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            1.466282326360e5,
            -2.584305167520e2,
            1.636935746410e-1,
            -3.304390469870e-5,
            -9.432236906120e-12,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -235.0,
        1874.0,
        &[
            0.000000000000e0,
            1.849494600000e-1,
            -8.005040620000e-5,
            1.022374300000e-7,
            -1.522485920000e-10,
            1.888213430000e-13,
            -1.590859410000e-16,
            8.230278800000e-20,
            -2.341819440000e-23,
            2.797862600000e-27,
        ],
    ),
    Segment::new(
        1874.0,
        11950.0,
        &[
            1.291507177000e1,
            1.466298863000e-1,
            -1.534713402000e-5,
            3.145945973000e-9,
            -4.163257839000e-13,
            3.187963771000e-17,
            -1.291637500000e-21,
            2.183475087000e-26,
            -1.447379511000e-31,
            8.211272125000e-36,
        ],
    ),
    Segment::new(
        10332.0,
        17536.0,
        &[
            -8.087801117000e1,
            1.621573104000e-1,
            -8.536869453000e-6,
            4.719686976000e-10,
            -1.441693666000e-14,
            2.081618890000e-19,
        ],
    ),
    Segment::new(
        17536.0,
        18693.0,
        &[
            5.333875126000e4,
            -1.235892298000e1,
            1.092657613000e-3,
            -4.265693686000e-8,
            6.247205420000e-13,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            5.403133086310e0,
            2.518685794800e-2,
            -6.974339060670e-5,
            1.288115292140e-7,
            -1.657325981950e-10,
            1.534465510720e-13,
            -8.754820997510e-17,
            2.171545409160e-20,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            3.345093113440e0,
            1.309610385640e-2,
            -4.945687776270e-6,
            5.199584206960e-11,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            -2.584305167520e2,
            3.273871492820e-1,
            -9.913171409610e-5,
            -3.772894762450e-11,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -50.0,
        1064.18,
        &[
            2.518685794800e-2,
            -1.394867812130e-4,
            3.864345876420e-7,
            -6.629303927800e-10,
            7.672327553600e-13,
            -5.252892598510e-16,
            1.520081786410e-19,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            1.309610385640e-2,
            -9.891375552540e-6,
            1.559875262090e-10,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            3.273871492820e-1,
            -1.982634281920e-4,
            -1.131868428730e-10,
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
            5.403133086310e0,
            1.259342897400e-2,
            -2.324779686890e-5,
            3.220288230360e-8,
            -3.314651963890e-11,
            2.557442517860e-14,
            -1.250688713930e-17,
            2.714431761450e-21,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            1.329004440850e3,
            3.345093113440e0,
            6.548051928180e-3,
            -1.648562592090e-6,
            1.299896051740e-11,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            1.466282326360e5,
            -2.584305167520e2,
            1.636935746410e-1,
            -3.304390469870e-5,
            -9.432236906120e-12,
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
            5.403133086310e0,
            2.518685794800e-2,
            -6.974339060670e-5,
            1.288115292140e-7,
            -1.657325981950e-10,
            1.534465510720e-13,
            -8.754820997510e-17,
            2.171545409160e-20,
        ],
    ),
    Segment::new(
        1064.18,
        1664.5,
        &[
            3.345093113440e0,
            1.309610385640e-2,
            -4.945687776270e-6,
            5.199584206960e-11,
        ],
    ),
    Segment::new(
        1664.5,
        1768.1,
        &[
            -2.584305167520e2,
            3.273871492820e-1,
            -9.913171409610e-5,
            -3.772894762450e-11,
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
