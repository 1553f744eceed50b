//! Type K (Ni-Cr / Ni-Al) reference functions.
//!
//! Above 0 °C the polynomial is completed by a Gaussian term centred near
//! 127 °C that models the magnetic transition of the negative leg; see
//! [`EMF_CORRECTION`] and its derivatives.

use tc_thermocouple::{CorrectionTerm, Segment};

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            3.945012802500e1,
            2.362237359800e-2,
            -3.285890678400e-4,
            -4.990482877700e-6,
            -6.750905917300e-8,
            -5.741032742800e-10,
            -3.108887289400e-12,
            -1.045160936500e-14,
            -1.988926687800e-17,
            -1.632269748600e-20,
        ],
    ),
    Segment::new(
        0.0,
        1372.0,
        &[
            -1.760041368600e1,
            3.892120497500e1,
            1.855877003200e-2,
            -9.945759287400e-5,
            3.184094571900e-7,
            -5.607284488900e-10,
            5.607505905900e-13,
            -3.202072000300e-16,
            9.715114715200e-20,
            -1.210472127500e-23,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -5891.0,
        0.0,
        &[
            0.000000000000e0,
            2.517346200000e-2,
            -1.166287800000e-6,
            -1.083363800000e-9,
            -8.977354000000e-13,
            -3.734237700000e-16,
            -8.663264300000e-20,
            -1.045059800000e-23,
            -5.192057700000e-28,
        ],
    ),
    Segment::new(
        0.0,
        20644.0,
        &[
            0.000000000000e0,
            2.508355000000e-2,
            7.860106000000e-8,
            -2.503131000000e-10,
            8.315270000000e-14,
            -1.228034000000e-17,
            9.804036000000e-22,
            -4.413030000000e-26,
            1.057734000000e-30,
            -1.052755000000e-35,
        ],
    ),
    Segment::new(
        20644.0,
        54886.0,
        &[
            -1.318058000000e2,
            4.830222000000e-2,
            -1.646031000000e-6,
            5.464731000000e-11,
            -9.650715000000e-16,
            8.802193000000e-21,
            -3.110810000000e-26,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            3.945012802500e1,
            4.724474719600e-2,
            -9.857672035200e-4,
            -1.996193151080e-5,
            -3.375452958650e-7,
            -3.444619645680e-9,
            -2.176221102580e-11,
            -8.361287492000e-14,
            -1.790034019020e-16,
            -1.632269748600e-19,
        ],
    ),
    Segment::new(
        0.0,
        1372.0,
        &[
            3.892120497500e1,
            3.711754006400e-2,
            -2.983727786220e-4,
            1.273637828760e-6,
            -2.803642244450e-9,
            3.364503543540e-12,
            -2.241450400210e-15,
            7.772091772160e-19,
            -1.089424914750e-22,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            4.724474719600e-2,
            -1.971534407040e-3,
            -5.988579453240e-5,
            -1.350181183460e-6,
            -1.722309822840e-8,
            -1.305732661550e-10,
            -5.852901244400e-13,
            -1.432027215220e-15,
            -1.469042773740e-18,
        ],
    ),
    Segment::new(
        0.0,
        1372.0,
        &[
            3.711754006400e-2,
            -5.967455572440e-4,
            3.820913486280e-6,
            -1.121456897780e-8,
            1.682251771770e-11,
            -1.344870240130e-14,
            5.440464240510e-18,
            -8.715399318000e-22,
        ],
    ),
];

/// Positive thermoelement (Ni-Cr) versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = super::type_e::POSITIVE_LEG_EMF;

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = super::type_e::POSITIVE_LEG_SEEBECK;

/// Negative thermoelement (Ni-Al), platinum versus element, °C to µV. Above
/// 0 °C it carries [`EMF_CORRECTION`] as well.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            1.363817745130e1,
            6.322856540000e-4,
            2.871594767600e-4,
            1.828136088730e-5,
            4.781942767870e-7,
            7.271290952420e-9,
            6.940395332060e-11,
            4.252401385450e-13,
            1.644863493222e-15,
            3.721398057514e-18,
            3.774143266000e-21,
            -1.002535579000e-24,
            -3.893530987000e-27,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            -1.760041368600e1,
            1.310925440300e1,
            -8.272625323000e-3,
            -6.078239846200e-5,
            2.881039039600e-7,
            -5.504480453600e-10,
            5.952323079200e-13,
            -4.027200945300e-16,
            1.760445293520e-19,
            -4.780397437500e-23,
            6.331536060000e-27,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            1.363817745130e1,
            1.264571308000e-3,
            8.614784302800e-4,
            7.312544354920e-5,
            2.390971383940e-6,
            4.362774571450e-8,
            4.858276732440e-10,
            3.401921108360e-12,
            1.480377143900e-14,
            3.721398057510e-17,
            4.151557592600e-20,
            -1.203042694800e-23,
            -5.061590283100e-26,
        ],
    ),
    Segment::new(
        0.0,
        1000.0,
        &[
            1.310925440300e1,
            -1.654525064600e-2,
            -1.823471953860e-4,
            1.152415615840e-6,
            -2.752240226800e-9,
            3.571393847520e-12,
            -2.819040661710e-15,
            1.408356234820e-18,
            -4.302357693750e-22,
            6.331536060000e-26,
        ],
    ),
];

// Gaussian term of the type K reference function above 0 °C.
const A0: f64 = 1.185976e2; // µV
const A1: f64 = -1.183432e-4; // °C⁻²
const A2: f64 = 1.269686e2; // °C

fn gaussian(t: f64) -> f64 {
    A0 * (A1 * (t - A2).powi(2)).exp()
}

fn emf_exponential(t: f64) -> f64 {
    if t > 0.0 { gaussian(t) } else { 0.0 }
}

fn seebeck_exponential(t: f64) -> f64 {
    if t > 0.0 {
        2.0 * A1 * (t - A2) * gaussian(t)
    } else {
        0.0
    }
}

fn dseebeck_exponential(t: f64) -> f64 {
    if t > 0.0 {
        let slope = 2.0 * A1 * (t - A2);
        gaussian(t) * (2.0 * A1 + slope * slope)
    } else {
        0.0
    }
}

/// Added to [`EMF`] and [`NEGATIVE_LEG_EMF`] above 0 °C, in µV.
pub const EMF_CORRECTION: CorrectionTerm =
    CorrectionTerm::new("type K magnetic-transition term", emf_exponential);

/// First derivative of [`EMF_CORRECTION`], added to [`SEEBECK`].
pub const SEEBECK_CORRECTION: CorrectionTerm =
    CorrectionTerm::new("type K magnetic-transition term, d/dT", seebeck_exponential);

/// Second derivative of [`EMF_CORRECTION`], added to [`DSEEBECK`].
pub const DSEEBECK_CORRECTION: CorrectionTerm =
    CorrectionTerm::new("type K magnetic-transition term, d²/dT²", dseebeck_exponential);
