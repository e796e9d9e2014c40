//! MS 立体声 (Middle/Side Stereo) 还原.
//!
//! 联合立体声且模式扩展 MS 位置位时, 码流中存放的是中置/边置声道,
//! 按 L = (M+S)/√2, R = (M−S)/√2 还原.

use std::f32::consts::FRAC_1_SQRT_2;

/// 对一个 granule 的两个声道做 MS 还原
pub fn ms_stereo(middle: &mut [f32; 576], side: &mut [f32; 576]) {
    for (m, s) in middle.iter_mut().zip(side.iter_mut()) {
        let left = (*m + *s) * FRAC_1_SQRT_2;
        let right = (*m - *s) * FRAC_1_SQRT_2;
        *m = left;
        *s = right;
    }
}
