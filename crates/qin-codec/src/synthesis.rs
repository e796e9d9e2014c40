//! 频率反转与多相合成滤波器组 (Polyphase Synthesis Filterbank).
//!
//! 每声道维护 1024 点延迟线. 每个时隙取 32 个子带样本,
//! 经 64x32 余弦矩阵展开进延迟线, 交织出 512 点向量,
//! 用 D 窗口加权后 16 段累加得到 32 个 PCM 样本.

use crate::tables::synth_window;

/// 频率反转: 奇数子带的奇数时域样本取反, 补偿滤波器组的频谱翻转
pub fn frequency_inversion(samples: &mut [f32; 576]) {
    for sb in (1..32).step_by(2) {
        for i in (1..18).step_by(2) {
            samples[sb * 18 + i] = -samples[sb * 18 + i];
        }
    }
}

/// 每声道的合成滤波器延迟线
#[derive(Debug, Clone)]
pub struct SynthState {
    fifo: [f32; 1024],
}

impl Default for SynthState {
    fn default() -> Self {
        Self { fifo: [0.0; 1024] }
    }
}

impl SynthState {
    pub fn reset(&mut self) {
        self.fifo = [0.0; 1024];
    }
}

/// 合成滤波器的查找状态 (窗口与余弦矩阵), 构造时一次算好
pub struct SynthFilter {
    window: [f32; 512],
    /// matrix[i][j] = cos((16+i)(2j+1)π/64)
    matrix: [[f32; 32]; 64],
}

impl Default for SynthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthFilter {
    pub fn new() -> Self {
        let mut matrix = [[0.0f32; 32]; 64];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let angle =
                    (16.0 + i as f64) * (2 * j + 1) as f64 * (std::f64::consts::PI / 64.0);
                *cell = angle.cos() as f32;
            }
        }
        Self {
            window: synth_window(),
            matrix,
        }
    }

    /// 处理一个时隙: 32 个子带样本 -> 32 个 PCM 样本
    pub fn process(&self, state: &mut SynthState, subband: &[f32; 32], pcm: &mut [f32; 32]) {
        // 1. 延迟线右移 64
        state.fifo.copy_within(0..960, 64);

        // 2. 矩阵展开进延迟线头部
        for (i, row) in self.matrix.iter().enumerate() {
            let mut sum = 0.0f32;
            for (s, n) in subband.iter().zip(row.iter()) {
                sum += s * n;
            }
            state.fifo[i] = sum;
        }

        // 3. 交织出 512 点向量并加窗
        let mut windowed = [0.0f32; 512];
        for i in 0..8 {
            for j in 0..32 {
                windowed[i * 64 + j] = state.fifo[i * 128 + j];
                windowed[i * 64 + j + 32] = state.fifo[i * 128 + j + 96];
            }
        }
        for (u, w) in windowed.iter_mut().zip(self.window.iter()) {
            *u *= w;
        }

        // 4. 16 段累加
        for (i, out) in pcm.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for j in 0..16 {
                sum += windowed[j * 32 + i];
            }
            *out = sum;
        }
    }
}
