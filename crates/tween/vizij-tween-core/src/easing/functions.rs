//! Easing formulas (Penner equations).
//!
//! Every function maps a phase `k` (nominally in [0,1]) to an eased value.
//! Inputs are not validated or clamped; overshoot families (Elastic, Back)
//! leave [0,1] by construction.

use std::f64::consts::PI;

const BACK_S: f64 = 1.70158;
const BACK_S_IN_OUT: f64 = BACK_S * 1.525;

#[inline]
pub fn linear(k: f64) -> f64 {
    k
}

// Quadratic

#[inline]
pub fn quadratic_in(k: f64) -> f64 {
    k * k
}

#[inline]
pub fn quadratic_out(k: f64) -> f64 {
    k * (2.0 - k)
}

#[inline]
pub fn quadratic_in_out(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * k * k;
    }
    let k = k - 1.0;
    -0.5 * (k * (k - 2.0) - 1.0)
}

// Cubic

#[inline]
pub fn cubic_in(k: f64) -> f64 {
    k * k * k
}

#[inline]
pub fn cubic_out(k: f64) -> f64 {
    let k = k - 1.0;
    k * k * k + 1.0
}

#[inline]
pub fn cubic_in_out(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * k * k * k;
    }
    let k = k - 2.0;
    0.5 * (k * k * k + 2.0)
}

// Quartic

#[inline]
pub fn quartic_in(k: f64) -> f64 {
    k * k * k * k
}

#[inline]
pub fn quartic_out(k: f64) -> f64 {
    let k = k - 1.0;
    1.0 - k * k * k * k
}

#[inline]
pub fn quartic_in_out(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * k * k * k * k;
    }
    let k = k - 2.0;
    -0.5 * (k * k * k * k - 2.0)
}

// Quintic

#[inline]
pub fn quintic_in(k: f64) -> f64 {
    k * k * k * k * k
}

#[inline]
pub fn quintic_out(k: f64) -> f64 {
    let k = k - 1.0;
    k * k * k * k * k + 1.0
}

#[inline]
pub fn quintic_in_out(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * k * k * k * k * k;
    }
    let k = k - 2.0;
    0.5 * (k * k * k * k * k + 2.0)
}

// Sinusoidal

#[inline]
pub fn sinusoidal_in(k: f64) -> f64 {
    1.0 - (k * PI / 2.0).cos()
}

#[inline]
pub fn sinusoidal_out(k: f64) -> f64 {
    (k * PI / 2.0).sin()
}

#[inline]
pub fn sinusoidal_in_out(k: f64) -> f64 {
    0.5 * (1.0 - (PI * k).cos())
}

// Exponential

#[inline]
pub fn exponential_in(k: f64) -> f64 {
    if k == 0.0 {
        0.0
    } else {
        1024f64.powf(k - 1.0)
    }
}

#[inline]
pub fn exponential_out(k: f64) -> f64 {
    if k == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * k)
    }
}

#[inline]
pub fn exponential_in_out(k: f64) -> f64 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * 1024f64.powf(k - 1.0);
    }
    0.5 * (2.0 - 2f64.powf(-10.0 * (k - 1.0)))
}

// Circular

#[inline]
pub fn circular_in(k: f64) -> f64 {
    1.0 - (1.0 - k * k).sqrt()
}

#[inline]
pub fn circular_out(k: f64) -> f64 {
    let k = k - 1.0;
    (1.0 - k * k).sqrt()
}

#[inline]
pub fn circular_in_out(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        return -0.5 * ((1.0 - k * k).sqrt() - 1.0);
    }
    let k = k - 2.0;
    0.5 * ((1.0 - k * k).sqrt() + 1.0)
}

// Elastic

#[inline]
pub fn elastic_in(k: f64) -> f64 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    -(2f64.powf(10.0 * (k - 1.0))) * ((k - 1.1) * 5.0 * PI).sin()
}

#[inline]
pub fn elastic_out(k: f64) -> f64 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    2f64.powf(-10.0 * k) * ((k - 0.1) * 5.0 * PI).sin() + 1.0
}

#[inline]
pub fn elastic_in_out(k: f64) -> f64 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k * 2.0;
    if k < 1.0 {
        return -0.5 * 2f64.powf(10.0 * (k - 1.0)) * ((k - 1.1) * 5.0 * PI).sin();
    }
    0.5 * 2f64.powf(-10.0 * (k - 1.0)) * ((k - 1.1) * 5.0 * PI).sin() + 1.0
}

// Back

#[inline]
pub fn back_in(k: f64) -> f64 {
    k * k * ((BACK_S + 1.0) * k - BACK_S)
}

#[inline]
pub fn back_out(k: f64) -> f64 {
    let k = k - 1.0;
    k * k * ((BACK_S + 1.0) * k + BACK_S) + 1.0
}

#[inline]
pub fn back_in_out(k: f64) -> f64 {
    let s = BACK_S_IN_OUT;
    let k = k * 2.0;
    if k < 1.0 {
        return 0.5 * (k * k * ((s + 1.0) * k - s));
    }
    let k = k - 2.0;
    0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
}

// Bounce

#[inline]
pub fn bounce_in(k: f64) -> f64 {
    1.0 - bounce_out(1.0 - k)
}

/// Four parabolic segments; thresholds at 1/2.75, 2/2.75 and 2.5/2.75.
#[inline]
pub fn bounce_out(k: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if k < 1.0 / D {
        N * k * k
    } else if k < 2.0 / D {
        let k = k - 1.5 / D;
        N * k * k + 0.75
    } else if k < 2.5 / D {
        let k = k - 2.25 / D;
        N * k * k + 0.9375
    } else {
        let k = k - 2.625 / D;
        N * k * k + 0.984375
    }
}

#[inline]
pub fn bounce_in_out(k: f64) -> f64 {
    if k < 0.5 {
        bounce_in(k * 2.0) * 0.5
    } else {
        bounce_out(k * 2.0 - 1.0) * 0.5 + 0.5
    }
}
