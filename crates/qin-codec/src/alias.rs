//! 抗混叠 (Alias Reduction).
//!
//! 长块在每个子带边界做 8 组蝴蝶运算抵消滤波器组的混叠.
//! 纯短块不做; 混合块只处理长块区域覆盖的第一个边界.

use crate::side_info::GranuleInfo;
use crate::tables::{CA, CS};

/// 对一个 (granule, channel) 的频谱做就地抗混叠
pub fn alias_reduction(granule: &GranuleInfo, spectrum: &mut [f32; 576]) {
    if granule.is_short() && !granule.mixed_block_flag {
        return;
    }

    let sb_max = if granule.is_short() { 2 } else { 32 };

    for sb in 1..sb_max {
        for (k, (&cs, &ca)) in CS.iter().zip(CA.iter()).enumerate() {
            let upper = 18 * sb - 1 - k;
            let lower = 18 * sb + k;
            let s1 = spectrum[upper];
            let s2 = spectrum[lower];
            spectrum[upper] = s1 * cs - s2 * ca;
            spectrum[lower] = s2 * cs + s1 * ca;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side_info::{BlockType, GranuleInfo};

    #[test]
    fn test_纯短块跳过() {
        let granule = GranuleInfo {
            window_switching: true,
            block_type: BlockType::Short,
            ..Default::default()
        };
        let mut spectrum = [0.0f32; 576];
        for (i, x) in spectrum.iter_mut().enumerate() {
            *x = i as f32;
        }
        let before = spectrum;
        alias_reduction(&granule, &mut spectrum);
        assert_eq!(spectrum, before);
    }

    #[test]
    fn test_蝴蝶只作用于边界() {
        let granule = GranuleInfo::default();
        let mut spectrum = [0.0f32; 576];
        spectrum[17] = 1.0; // 子带 0/1 边界上沿
        alias_reduction(&granule, &mut spectrum);

        // 边界蝴蝶把能量分散到 (17, 18)
        assert!((spectrum[17] - CS[0]).abs() < 1e-6);
        assert!((spectrum[18] - CA[0]).abs() < 1e-6);
        // 远离边界的样本不受影响
        assert_eq!(spectrum[0], 0.0);
        assert_eq!(spectrum[30], 0.0);
    }

    #[test]
    fn test_蝴蝶保范数() {
        // cs^2 + ca^2 = 1, 每组蝴蝶是旋转, 总能量不变
        let granule = GranuleInfo::default();
        let mut spectrum = [0.0f32; 576];
        for (i, x) in spectrum.iter_mut().enumerate() {
            *x = ((i * 37) % 17) as f32 - 8.0;
        }
        let energy_before: f32 = spectrum.iter().map(|x| x * x).sum();
        alias_reduction(&granule, &mut spectrum);
        let energy_after: f32 = spectrum.iter().map(|x| x * x).sum();
        assert!((energy_before - energy_after).abs() / energy_before < 1e-4);
    }

    #[test]
    fn test_混合块只处理首边界() {
        let granule = GranuleInfo {
            window_switching: true,
            block_type: BlockType::Short,
            mixed_block_flag: true,
            ..Default::default()
        };
        let mut spectrum = [0.0f32; 576];
        spectrum[17] = 1.0;
        spectrum[35] = 1.0; // 子带 1/2 边界, 混合块不处理
        alias_reduction(&granule, &mut spectrum);
        assert!((spectrum[17] - CS[0]).abs() < 1e-6);
        assert_eq!(spectrum[35], 1.0);
    }
}
