//! Type N (Ni-Cr-Si / Ni-Si) reference functions.
//!
//! The trailing inverse segment spans the whole positive EMF range and only
//! resolves values the earlier segments already cover.

use tc_thermocouple::Segment;

/// Thermocouple EMF, °C to µV.
pub const EMF: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            0.000000000000e0,
            2.615910596200e1,
            1.095748422800e-2,
            -9.384111155400e-5,
            -4.641203975900e-8,
            -2.630335771600e-9,
            -2.265343800300e-11,
            -7.608930079100e-14,
            -9.341966783500e-17,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            0.000000000000e0,
            2.592939460100e1,
            1.571014188000e-2,
            4.382562723700e-5,
            -2.526116979400e-7,
            6.431181933900e-10,
            -1.006347151900e-12,
            9.974533899200e-16,
            -6.086324560700e-19,
            2.084922933900e-22,
            -3.068219615100e-26,
        ],
    ),
];

/// Inverse reference function, µV to °C.
pub const INVERSE_EMF: &[Segment] = &[
    Segment::new(
        -3990.0,
        0.0,
        &[
            0.000000000000e0,
            3.843684700000e-2,
            1.101048500000e-6,
            5.222931200000e-9,
            7.206052500000e-12,
            5.848858600000e-15,
            2.775491600000e-18,
            7.707516600000e-22,
            1.158266500000e-25,
            7.313886800000e-30,
        ],
    ),
    Segment::new(
        0.0,
        20613.0,
        &[
            0.000000000000e0,
            3.868960000000e-2,
            -1.082670000000e-6,
            4.702050000000e-11,
            -2.121690000000e-18,
            -1.172720000000e-19,
            5.392800000000e-24,
            -7.981560000000e-29,
        ],
    ),
    Segment::new(
        20613.0,
        47513.0,
        &[
            1.972485000000e1,
            3.300943000000e-2,
            -3.915159000000e-7,
            9.855391000000e-12,
            -1.274371000000e-16,
            7.767022000000e-22,
        ],
    ),
    Segment::new(
        0.0,
        47513.0,
        &[
            0.000000000000e0,
            3.876327700000e-2,
            -1.161234400000e-6,
            6.952565500000e-11,
            -3.009007700000e-15,
            8.831158400000e-20,
            -1.621383900000e-24,
            1.669336200000e-29,
            -7.311754000000e-35,
        ],
    ),
];

/// Seebeck coefficient, °C to µV/K.
pub const SEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            2.615910596200e1,
            2.191496845600e-2,
            -2.815233346620e-4,
            -1.856481590360e-7,
            -1.315167885800e-8,
            -1.359206280180e-10,
            -5.326251055370e-13,
            -7.473573426800e-16,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            2.592939460100e1,
            3.142028376000e-2,
            1.314768817110e-4,
            -1.010446791760e-6,
            3.215590966950e-9,
            -6.038082911400e-12,
            6.982173729440e-15,
            -4.869059648560e-18,
            1.876430640510e-21,
            -3.068219615100e-25,
        ],
    ),
];

/// Temperature derivative of the Seebeck coefficient, °C to µV/K².
pub const DSEEBECK: &[Segment] = &[
    Segment::new(
        -270.0,
        0.0,
        &[
            2.191496845600e-2,
            -5.630466693240e-4,
            -5.569444771080e-7,
            -5.260671543200e-8,
            -6.796031400900e-10,
            -3.195750633220e-12,
            -5.231501398760e-15,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            3.142028376000e-2,
            2.629537634220e-4,
            -3.031340375280e-6,
            1.286236386780e-8,
            -3.019041455700e-11,
            4.189304237660e-14,
            -3.408341753990e-17,
            1.501144512410e-20,
            -2.761397653590e-24,
        ],
    ),
];

/// Positive thermoelement versus platinum, °C to µV.
pub const POSITIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -200.0,
        0.0,
        &[
            0.000000000000e0,
            1.074111753200e1,
            -1.474989822900e-2,
            -3.653285783200e-6,
            4.901358902900e-7,
            7.222858260400e-10,
            -1.538109323600e-11,
            -7.608930079100e-14,
            -9.341966783500e-17,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            0.000000000000e0,
            1.048400865500e1,
            -1.101219940900e-2,
            6.942094028900e-5,
            -2.195836005300e-7,
            4.423649636800e-10,
            -5.792656096400e-13,
            4.793166547000e-16,
            -2.397612067600e-19,
            6.580494631800e-23,
            -7.560893996500e-27,
        ],
    ),
];

/// Negative thermoelement versus platinum, °C to µV.
pub const NEGATIVE_LEG_EMF: &[Segment] = &[
    Segment::new(
        -200.0,
        0.0,
        &[
            0.000000000000e0,
            1.541798843000e1,
            2.570738245700e-2,
            -9.018782577100e-5,
            -5.365479300500e-7,
            -3.352621597600e-9,
            -7.272344767000e-12,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            0.000000000000e0,
            1.544538594600e1,
            2.672234128900e-2,
            -2.559531305200e-5,
            -3.302809741400e-8,
            2.007532297100e-10,
            -4.270815423000e-13,
            5.181367352200e-16,
            -3.688712493100e-19,
            1.426873470720e-22,
            -2.312130215400e-26,
        ],
    ),
];

/// Positive thermoelement Seebeck coefficient, °C to µV/K.
pub const POSITIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -200.0,
        0.0,
        &[
            1.074111753200e1,
            -2.949979645800e-2,
            -1.095985734960e-5,
            1.960543561160e-6,
            3.611429130200e-9,
            -9.228655941600e-11,
            -5.326251055370e-13,
            -7.473573426800e-16,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            1.048400865500e1,
            -2.202439881800e-2,
            2.082628208670e-4,
            -8.783344021200e-7,
            2.211824818400e-9,
            -3.475593657840e-12,
            3.355216582900e-15,
            -1.918089654080e-18,
            5.922445168620e-22,
            -7.560893996500e-26,
        ],
    ),
];

/// Negative thermoelement Seebeck coefficient, °C to µV/K.
pub const NEGATIVE_LEG_SEEBECK: &[Segment] = &[
    Segment::new(
        -200.0,
        0.0,
        &[
            1.541798843000e1,
            5.141476491400e-2,
            -2.705634773130e-4,
            -2.146191720200e-6,
            -1.676310798800e-8,
            -4.363406860200e-11,
        ],
    ),
    Segment::new(
        0.0,
        1300.0,
        &[
            1.544538594600e1,
            5.344468257800e-2,
            -7.678593915600e-5,
            -1.321123896560e-7,
            1.003766148550e-9,
            -2.562489253800e-12,
            3.626957146540e-15,
            -2.950969994480e-18,
            1.284186123650e-21,
            -2.312130215400e-25,
        ],
    ),
];
