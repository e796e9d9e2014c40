//! 短块重排序 (Reordering).
//!
//! 短块的频谱在码流中按 (频带, 窗口, 带内系数) 扫描序存放;
//! IMDCT 需要的是每个 18 点子带块内按 (窗口, 系数) 排列:
//! 子带块内 [0..6) 为窗口 0, [6..12) 为窗口 1, [12..18) 为窗口 2.
//!
//! 混合块只重排短块区域 (从样本 36 / 短带 3 起), 长块区域保持原位.

use crate::side_info::GranuleInfo;
use crate::tables::BAND_INDEX_SHORT;

/// 对短块/混合块的频谱做就地重排序; 长块为空操作
pub fn reorder(granule: &GranuleInfo, spectrum: &mut [f32; 576], sr_index: usize) {
    if !granule.is_short() {
        return;
    }

    let bands = &BAND_INDEX_SHORT[sr_index];
    let sfb_start = if granule.mixed_block_flag { 3 } else { 0 };

    let scratch = *spectrum;
    let mut src = 3 * bands[sfb_start];

    for sfb in sfb_start..13 {
        let start = bands[sfb];
        let width = bands[sfb + 1] - start;
        for window in 0..3 {
            for i in 0..width {
                // 窗口内频率线 line 落入子带块 line/6 的窗口槽位
                let line = start + i;
                let dst = line / 6 * 18 + window * 6 + line % 6;
                spectrum[dst] = scratch[src];
                src += 1;
            }
        }
    }
}
