//! 比例因子 (Scalefactor) 解析.
//!
//! 从 main_data 读取每个 (granule, channel) 的比例因子.
//! 长块 21 个频带; 短块每窗口 12 个频带; 混合块前 8 个长带 + 短带 3-11.
//! granule 1 的长块可按 scfsi 分组复用 granule 0 的值.

use qin_core::{BitReader, QinResult};

use crate::side_info::GranuleInfo;
use crate::tables::SLEN;

/// 单个 (granule, channel) 的比例因子
#[derive(Debug, Clone, Default)]
pub struct Scalefactors {
    /// 长块比例因子, [21] 恒为 0
    pub long: [u32; 22],
    /// 短块比例因子 [window][band], [*][12] 恒为 0
    pub short: [[u32; 13]; 3],
}

/// scfsi 的 4 个分组覆盖的长块频带区间
const SCFSI_GROUPS: [(usize, usize); 4] = [(0, 6), (6, 11), (11, 16), (16, 21)];

/// 读取一个 (granule, channel) 的比例因子.
///
/// `gr0` 为同声道 granule 0 的结果, 仅在解析 granule 1 且 scfsi
/// 指示复用时使用.
pub fn unpack(
    reader: &mut BitReader,
    granule: &GranuleInfo,
    scfsi: &[bool; 4],
    gr: usize,
    gr0: Option<&Scalefactors>,
) -> QinResult<Scalefactors> {
    let [slen1, slen2] = SLEN[granule.scalefac_compress];
    let mut sf = Scalefactors::default();

    if granule.is_short() {
        if granule.mixed_block_flag {
            // 混合块: 8 个长带 (slen1), 短带 3-5 (slen1), 短带 6-11 (slen2)
            for sfb in 0..8 {
                sf.long[sfb] = reader.read_bits(slen1)?;
            }
            for sfb in 3..6 {
                for window in 0..3 {
                    sf.short[window][sfb] = reader.read_bits(slen1)?;
                }
            }
            for sfb in 6..12 {
                for window in 0..3 {
                    sf.short[window][sfb] = reader.read_bits(slen2)?;
                }
            }
        } else {
            // 纯短块: 短带 0-5 (slen1), 6-11 (slen2)
            for sfb in 0..6 {
                for window in 0..3 {
                    sf.short[window][sfb] = reader.read_bits(slen1)?;
                }
            }
            for sfb in 6..12 {
                for window in 0..3 {
                    sf.short[window][sfb] = reader.read_bits(slen2)?;
                }
            }
        }
        // 短带 12 不传输
    } else if gr == 0 {
        // 长块 granule 0: 全部读取
        for sfb in 0..11 {
            sf.long[sfb] = reader.read_bits(slen1)?;
        }
        for sfb in 11..21 {
            sf.long[sfb] = reader.read_bits(slen2)?;
        }
    } else {
        // 长块 granule 1: 按 scfsi 分组决定复用或重读
        for (group, &(start, end)) in SCFSI_GROUPS.iter().enumerate() {
            let slen = if group < 2 { slen1 } else { slen2 };
            for sfb in start..end {
                if scfsi[group] {
                    sf.long[sfb] = gr0.map(|p| p.long[sfb]).unwrap_or(0);
                } else {
                    sf.long[sfb] = reader.read_bits(slen)?;
                }
            }
        }
    }

    Ok(sf)
}
