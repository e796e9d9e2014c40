//! 反量化 (Requantization).
//!
//! 把 Huffman 解码出的整数样本恢复为浮点频谱:
//! `xr = sign(is) * |is|^(4/3) * 2^(A/4) * 2^(-B)`,
//! 其中 A 由 global_gain (短块再叠加 subblock_gain) 决定,
//! B 由比例因子、preflag/pretab 与 scalefac_scale 决定.

use crate::scalefactors::Scalefactors;
use crate::side_info::GranuleInfo;
use crate::tables::{BAND_INDEX_LONG, BAND_INDEX_SHORT, PRETAB};

/// 反量化一个 (granule, channel) 的 576 个样本
pub fn requantize(
    granule: &GranuleInfo,
    scalefactors: &Scalefactors,
    samples: &[i32; 576],
    spectrum: &mut [f32; 576],
    sr_index: usize,
) {
    if granule.is_short() {
        if granule.mixed_block_flag {
            requantize_mixed(granule, scalefactors, samples, spectrum, sr_index);
        } else {
            requantize_short(granule, scalefactors, samples, spectrum, sr_index, 0, 0);
        }
    } else {
        requantize_long(granule, scalefactors, samples, spectrum, sr_index, 0, 22);
    }
}

/// sign(is) * |is|^(4/3) * multiplier
#[inline]
fn dequant(value: i32, multiplier: f32) -> f32 {
    if value == 0 {
        return 0.0;
    }
    let magnitude = (value.unsigned_abs() as f32).powf(4.0 / 3.0) * multiplier;
    if value < 0 { -magnitude } else { magnitude }
}

/// 长块频带 [sfb_start, sfb_end) 的反量化
fn requantize_long(
    granule: &GranuleInfo,
    scalefactors: &Scalefactors,
    samples: &[i32; 576],
    spectrum: &mut [f32; 576],
    sr_index: usize,
    sfb_start: usize,
    sfb_end: usize,
) {
    let bands = &BAND_INDEX_LONG[sr_index];
    let scalefac_mult = if granule.scalefac_scale { 1.0 } else { 0.5 };
    let preflag = if granule.preflag { 1.0 } else { 0.0 };

    for sfb in sfb_start..sfb_end {
        let sf = scalefactors.long[sfb.min(21)] as f64;
        let pretab = PRETAB[sfb.min(21)] as f64;
        let b = scalefac_mult * (sf + preflag * pretab);
        let exponent = f64::from(granule.global_gain) - 210.0 - 4.0 * b;
        let multiplier = 2.0f64.powf(exponent / 4.0) as f32;

        for idx in bands[sfb]..bands[sfb + 1] {
            spectrum[idx] = dequant(samples[idx], multiplier);
        }
    }
}

/// 短块频带 [sfb_start, 13) 的反量化, 输入按 (sfb, window) 扫描序
fn requantize_short(
    granule: &GranuleInfo,
    scalefactors: &Scalefactors,
    samples: &[i32; 576],
    spectrum: &mut [f32; 576],
    sr_index: usize,
    sfb_start: usize,
    mut idx: usize,
) {
    let bands = &BAND_INDEX_SHORT[sr_index];
    let scalefac_mult = if granule.scalefac_scale { 1.0 } else { 0.5 };

    for sfb in sfb_start..13 {
        let width = bands[sfb + 1] - bands[sfb];
        for window in 0..3 {
            let sf = if sfb < 12 {
                scalefactors.short[window][sfb] as f64
            } else {
                0.0
            };
            let exponent = f64::from(granule.global_gain)
                - 210.0
                - 8.0 * f64::from(granule.subblock_gain[window])
                - 4.0 * scalefac_mult * sf;
            let multiplier = 2.0f64.powf(exponent / 4.0) as f32;

            for _ in 0..width {
                if idx >= 576 {
                    return;
                }
                spectrum[idx] = dequant(samples[idx], multiplier);
                idx += 1;
            }
        }
    }
}

/// 混合块: 前 8 个长带用长块公式, 之后从短带 3 起用短块公式
fn requantize_mixed(
    granule: &GranuleInfo,
    scalefactors: &Scalefactors,
    samples: &[i32; 576],
    spectrum: &mut [f32; 576],
    sr_index: usize,
) {
    requantize_long(granule, scalefactors, samples, spectrum, sr_index, 0, 8);
    let long_end = BAND_INDEX_LONG[sr_index][8];
    requantize_short(
        granule,
        scalefactors,
        samples,
        spectrum,
        sr_index,
        3,
        long_end,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side_info::{BlockType, GranuleInfo};

    #[test]
    fn test_零样本输出零() {
        let granule = GranuleInfo {
            global_gain: 100,
            ..Default::default()
        };
        let sf = Scalefactors::default();
        let samples = [0i32; 576];
        let mut spectrum = [1.0f32; 576];
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        assert!(spectrum.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_global_gain_210_为单位增益() {
        // global_gain=210, 比例因子为零: multiplier = 1, |±1|^(4/3) = 1
        let granule = GranuleInfo {
            global_gain: 210,
            ..Default::default()
        };
        let sf = Scalefactors::default();
        let mut samples = [0i32; 576];
        samples[0] = 1;
        samples[1] = -1;
        samples[100] = 8;
        let mut spectrum = [0.0f32; 576];
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        assert!((spectrum[0] - 1.0).abs() < 1e-6);
        assert!((spectrum[1] + 1.0).abs() < 1e-6);
        // 8^(4/3) = 16
        assert!((spectrum[100] - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_global_gain_指数步长() {
        // global_gain 每 +4, 幅度乘 2
        let sf = Scalefactors::default();
        let mut samples = [0i32; 576];
        samples[0] = 1;

        let mut out214 = [0.0f32; 576];
        let granule = GranuleInfo {
            global_gain: 214,
            ..Default::default()
        };
        requantize(&granule, &sf, &samples, &mut out214, 0);
        assert!((out214[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_比例因子衰减() {
        // scalefac_scale=0 -> mult 0.5; 因子 2 -> B = 1 -> 2^-1
        let granule = GranuleInfo {
            global_gain: 210,
            ..Default::default()
        };
        let mut sf = Scalefactors::default();
        sf.long[0] = 2;
        let mut samples = [0i32; 576];
        samples[0] = 1;
        let mut spectrum = [0.0f32; 576];
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        assert!((spectrum[0] - 0.5).abs() < 1e-6);

        // scalefac_scale=1 -> mult 1.0 -> B = 2 -> 2^-2
        let granule = GranuleInfo {
            global_gain: 210,
            scalefac_scale: true,
            ..Default::default()
        };
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        assert!((spectrum[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_preflag_叠加() {
        // sfb 17 的 pretab = 3; preflag 置位且 mult=0.5 -> B = 1.5
        let granule = GranuleInfo {
            global_gain: 210,
            preflag: true,
            ..Default::default()
        };
        let sf = Scalefactors::default();
        let mut samples = [0i32; 576];
        let idx = BAND_INDEX_LONG[0][17];
        samples[idx] = 1;
        let mut spectrum = [0.0f32; 576];
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        let expected = 2.0f32.powf(-1.5);
        assert!((spectrum[idx] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_短块_subblock_gain() {
        // 窗口 1 的 subblock_gain=1 -> A 减 8 -> 幅度乘 2^-2
        let granule = GranuleInfo {
            global_gain: 210,
            window_switching: true,
            block_type: BlockType::Short,
            subblock_gain: [0, 1, 0],
            ..Default::default()
        };
        let sf = Scalefactors::default();
        let mut samples = [0i32; 576];
        // sfb 0 宽 4: 窗口 0 占 [0,4), 窗口 1 占 [4,8)
        samples[0] = 1;
        samples[4] = 1;
        let mut spectrum = [0.0f32; 576];
        requantize(&granule, &sf, &samples, &mut spectrum, 0);
        assert!((spectrum[0] - 1.0).abs() < 1e-6);
        assert!((spectrum[4] - 0.25).abs() < 1e-6);
    }
}
