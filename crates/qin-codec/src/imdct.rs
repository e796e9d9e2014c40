//! IMDCT 与重叠相加.
//!
//! 每个子带 18 个频谱系数经逆 MDCT 得到 36 个时域样本,
//! 按窗口类型加窗后, 前 18 点与上一 granule 的重叠缓冲相加输出,
//! 后 18 点存入缓冲供下一 granule 使用.
//!
//! 短块以三个 12 点子变换实现, 窗口化后在 36 点块内错位叠加.

use std::f64::consts::PI;

use crate::side_info::{BlockType, GranuleInfo};

/// IMDCT 窗口表, 构造时一次算好
pub struct ImdctWindows {
    /// 0=长块, 1=起始块, 3=结束块 (36 点); 2 槽位弃置不用
    long: [[f32; 36]; 4],
    /// 短块窗口 (12 点)
    short: [f32; 12],
}

impl Default for ImdctWindows {
    fn default() -> Self {
        Self::new()
    }
}

impl ImdctWindows {
    pub fn new() -> Self {
        let mut long = [[0.0f32; 36]; 4];

        // 长块: 完整正弦窗
        for (i, w) in long[0].iter_mut().enumerate() {
            *w = (PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }
        // 起始块: 前半正弦, 平台, 短窗下降沿, 尾部清零
        for i in 0..18 {
            long[1][i] = (PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }
        for i in 18..24 {
            long[1][i] = 1.0;
        }
        for i in 24..30 {
            long[1][i] = (PI / 12.0 * ((i - 18) as f64 + 0.5)).sin() as f32;
        }
        // 结束块: 起始块的时间反转
        for i in 0..6 {
            long[3][i] = 0.0;
        }
        for i in 6..12 {
            long[3][i] = (PI / 12.0 * ((i - 6) as f64 + 0.5)).sin() as f32;
        }
        for i in 12..18 {
            long[3][i] = 1.0;
        }
        for i in 18..36 {
            long[3][i] = (PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }

        let mut short = [0.0f32; 12];
        for (i, w) in short.iter_mut().enumerate() {
            *w = (PI / 12.0 * (i as f64 + 0.5)).sin() as f32;
        }

        Self { long, short }
    }

    /// 处理一个 (granule, channel): 32 个子带的 IMDCT + 加窗 + 重叠相加.
    ///
    /// `overlap` 为该声道的跨 granule 状态.
    pub fn process(
        &self,
        granule: &GranuleInfo,
        spectrum: &[f32; 576],
        overlap: &mut [[f32; 18]; 32],
        output: &mut [f32; 576],
    ) {
        for sb in 0..32 {
            let coeffs: &[f32] = &spectrum[sb * 18..sb * 18 + 18];

            // 混合块的最低 2 个子带按长块处理
            let short_band = granule.is_short() && (!granule.mixed_block_flag || sb >= 2);

            let mut block = [0.0f32; 36];
            if short_band {
                self.short_block(coeffs, &mut block);
            } else {
                imdct36(coeffs, &mut block);
                let window = match granule.block_type {
                    BlockType::Start => &self.long[1],
                    BlockType::End => &self.long[3],
                    // 长块, 或混合块的长块子带
                    _ => &self.long[0],
                };
                for (x, w) in block.iter_mut().zip(window.iter()) {
                    *x *= w;
                }
            }

            let prev = &mut overlap[sb];
            for i in 0..18 {
                output[sb * 18 + i] = block[i] + prev[i];
                prev[i] = block[18 + i];
            }
        }
    }

    /// 三个 12 点子变换, 窗口化后错位叠加进 36 点块:
    /// 6 零, w0 前半, w0 后半+w1 前半, w1 后半+w2 前半, w2 后半, 6 零
    fn short_block(&self, coeffs: &[f32], block: &mut [f32; 36]) {
        let mut windowed = [[0.0f32; 12]; 3];
        for (window, out) in windowed.iter_mut().enumerate() {
            imdct12(&coeffs[window * 6..window * 6 + 6], out);
            for (x, w) in out.iter_mut().zip(self.short.iter()) {
                *x *= w;
            }
        }

        for i in 0..6 {
            block[6 + i] += windowed[0][i];
            block[12 + i] += windowed[0][6 + i] + windowed[1][i];
            block[18 + i] += windowed[1][6 + i] + windowed[2][i];
            block[24 + i] += windowed[2][6 + i];
        }
    }
}

/// 12 点逆 MDCT (6 个频谱系数 -> 12 个时域样本)
fn imdct12(input: &[f32], output: &mut [f32; 12]) {
    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for (k, &s) in input.iter().enumerate().take(6) {
            sum += f64::from(s) * (PI / 24.0 * (2 * i + 7) as f64 * (2 * k + 1) as f64).cos();
        }
        *out = sum as f32;
    }
}

/// 36 点逆 MDCT (18 个频谱系数 -> 36 个时域样本)
fn imdct36(input: &[f32], output: &mut [f32; 36]) {
    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for (k, &s) in input.iter().enumerate().take(18) {
            sum += f64::from(s) * (PI / 72.0 * (2 * i + 19) as f64 * (2 * k + 1) as f64).cos();
        }
        *out = sum as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side_info::{BlockType, GranuleInfo};

    #[test]
    fn test_零输入保持重叠缓冲() {
        let windows = ImdctWindows::new();
        let granule = GranuleInfo::default();
        let spectrum = [0.0f32; 576];
        let mut overlap = [[0.0f32; 18]; 32];
        overlap[0][0] = 0.5;
        let mut output = [0.0f32; 576];

        windows.process(&granule, &spectrum, &mut overlap, &mut output);

        // 上一 granule 的重叠样本出现在输出头部
        assert_eq!(output[0], 0.5);
        // 零输入之后重叠缓冲归零
        assert_eq!(overlap[0][0], 0.0);
    }

    #[test]
    fn test_长块重叠传递() {
        // 连续两次处理同一非零频谱: 第二次输出的前 18 点
        // 等于 块[0..18] + 前一次的 块[18..36]
        let windows = ImdctWindows::new();
        let granule = GranuleInfo::default();
        let mut spectrum = [0.0f32; 576];
        spectrum[0] = 1.0;
        spectrum[5] = -0.5;

        let mut overlap = [[0.0f32; 18]; 32];
        let mut first = [0.0f32; 576];
        windows.process(&granule, &spectrum, &mut overlap, &mut first);
        let carried = overlap[0];

        let mut second = [0.0f32; 576];
        windows.process(&granule, &spectrum, &mut overlap, &mut second);
        for i in 0..18 {
            let expected = first[i] + carried[i];
            assert!((second[i] - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_长块后接短块的重叠() {
        // 长块 granule 留下的重叠缓冲必须叠加进随后短块 granule 的输出
        let windows = ImdctWindows::new();
        let long = GranuleInfo::default();
        let mut spectrum = [0.0f32; 576];
        spectrum[0] = 1.0;

        let mut overlap = [[0.0f32; 18]; 32];
        let mut output = [0.0f32; 576];
        windows.process(&long, &spectrum, &mut overlap, &mut output);
        let carried = overlap[0];
        assert!(carried.iter().any(|&x| x != 0.0));

        let short = GranuleInfo {
            window_switching: true,
            block_type: BlockType::Short,
            ..Default::default()
        };
        let zeros = [0.0f32; 576];
        let mut second = [0.0f32; 576];
        windows.process(&short, &zeros, &mut overlap, &mut second);
        // 零输入短块的输出就是长块留下的重叠样本
        for i in 0..18 {
            assert!((second[i] - carried[i]).abs() < 1e-7);
        }
    }

    #[test]
    fn test_窗口形状() {
        let windows = ImdctWindows::new();
        // 正弦窗两端趋近 0, 中心趋近 1
        assert!(windows.long[0][0] < 0.1);
        assert!((windows.long[0][17] - 1.0).abs() < 0.01);
        // 起始块平台为 1, 尾部为 0
        assert_eq!(windows.long[1][20], 1.0);
        assert_eq!(windows.long[1][35], 0.0);
        // 结束块头部为 0, 平台为 1
        assert_eq!(windows.long[3][0], 0.0);
        assert_eq!(windows.long[3][14], 1.0);
    }

    #[test]
    fn test_短块错位叠加边缘为零() {
        let windows = ImdctWindows::new();
        let granule = GranuleInfo {
            window_switching: true,
            block_type: BlockType::Short,
            ..Default::default()
        };
        let mut spectrum = [0.0f32; 576];
        for x in spectrum.iter_mut().take(18) {
            *x = 1.0;
        }
        let mut overlap = [[0.0f32; 18]; 32];
        let mut output = [0.0f32; 576];
        windows.process(&granule, &spectrum, &mut overlap, &mut output);

        // 36 点块的前 6 点为零 (落在输出), 后 6 点为零 (落在重叠缓冲)
        for i in 0..6 {
            assert_eq!(output[i], 0.0);
            assert_eq!(overlap[0][12 + i], 0.0);
        }
        // 中段有能量
        assert!(output[6..18].iter().any(|&x| x != 0.0));
    }
}
