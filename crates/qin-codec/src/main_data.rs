//! 比特储备库 (Bit Reservoir) 与 main_data 拼接.
//!
//! 编码器可以把本帧的 main_data 前移到之前至多 9 帧的负载区里,
//! 以 `main_data_begin` (侧边信息边界之前的字节数) 指示起点.
//! 解码器维护最近 9 帧的字节大小窗口, 拼接时跳过每个历史帧的
//! 帧头+侧边信息区域, 只取其负载字节.

use qin_core::{QinError, QinResult};

use crate::header::FrameHeader;

/// 储备库窗口覆盖的历史帧数
pub const RESERVOIR_FRAMES: usize = 9;

/// 比特储备库: 最近若干帧的大小滑动窗口
#[derive(Debug, Clone, Default)]
pub struct BitReservoir {
    /// 最近帧的字节大小, [0] 为最新; 0 表示尚无该帧
    prev_sizes: [usize; RESERVOIR_FRAMES],
}

impl BitReservoir {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空历史窗口
    pub fn reset(&mut self) {
        self.prev_sizes = [0; RESERVOIR_FRAMES];
    }

    /// 解码完一帧后推入其大小
    pub fn push(&mut self, frame_size: usize) {
        self.prev_sizes.copy_within(0..RESERVOIR_FRAMES - 1, 1);
        self.prev_sizes[0] = frame_size;
    }

    /// 拼接当前帧的 main_data.
    ///
    /// `data` 为完整输入缓冲区, `offset` 指向当前帧头.
    /// 返回长度为 `main_data_begin + frame_size - C` 的缓冲.
    pub fn assemble(
        &self,
        data: &[u8],
        offset: usize,
        header: &FrameHeader,
        main_data_begin: usize,
    ) -> QinResult<Vec<u8>> {
        let c = header.data_offset();
        let frame_end = offset + header.frame_size;
        if header.frame_size < c || frame_end > data.len() {
            return Err(QinError::Eof);
        }
        let payload = &data[offset + c..frame_end];

        if main_data_begin == 0 {
            return Ok(payload.to_vec());
        }

        // 从最近的历史帧开始向前收集, 每帧只取负载区尾部
        let mut segments: Vec<(usize, usize)> = Vec::new();
        let mut need = main_data_begin;
        let mut pos = offset;
        for &size in &self.prev_sizes {
            if need == 0 {
                break;
            }
            if size == 0 || size <= c || pos < size {
                return Err(QinError::InvalidData(format!(
                    "比特储备库下溢: main_data_begin={main_data_begin} 超出历史窗口"
                )));
            }
            pos -= size;
            let capacity = size - c;
            let take = need.min(capacity);
            segments.push((pos + c + (capacity - take), take));
            need -= take;
        }
        if need > 0 {
            return Err(QinError::InvalidData(format!(
                "比特储备库下溢: main_data_begin={main_data_begin} 超出历史窗口"
            )));
        }

        let mut main_data = Vec::with_capacity(main_data_begin + payload.len());
        // segments 按从新到旧收集, 拼接时按时间顺序反转
        for &(start, len) in segments.iter().rev() {
            main_data.extend_from_slice(&data[start..start + len]);
        }
        main_data.extend_from_slice(payload);
        Ok(main_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::FrameHeader;

    fn stereo_header() -> FrameHeader {
        // 417 字节帧, C = 36
        FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x00]).unwrap()
    }

    /// 构造 3 个连续 417 字节帧, 内容为递增字节序列
    fn three_frames() -> Vec<u8> {
        (0..417 * 3).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_main_data_begin_为零() {
        let header = stereo_header();
        let data = three_frames();
        let reservoir = BitReservoir::new();

        let md = reservoir.assemble(&data, 0, &header, 0).unwrap();
        assert_eq!(md.len(), 417 - 36);
        assert_eq!(md[..], data[36..417]);
    }

    #[test]
    fn test_跨两帧拼接() {
        let header = stereo_header();
        let data = three_frames();
        let mut reservoir = BitReservoir::new();
        reservoir.push(417); // 帧 0
        reservoir.push(417); // 帧 1

        // 帧 2 (offset 834), main_data_begin = 500:
        // 先取帧 1 负载全部 381 字节 (453..834), 再往前从帧 0 负载尾部取 119 字节
        // (417-119=298 .. 417), 最后接上当前帧负载 (870..1251)
        let md = reservoir.assemble(&data, 834, &header, 500).unwrap();
        assert_eq!(md.len(), 500 + 417 - 36);
        assert_eq!(md[..119], data[298..417]);
        assert_eq!(md[119..500], data[453..834]);
        assert_eq!(md[500..], data[870..1251]);
    }

    #[test]
    fn test_单帧内回溯() {
        let header = stereo_header();
        let data = three_frames();
        let mut reservoir = BitReservoir::new();
        reservoir.push(417);

        // 帧 1, main_data_begin = 100: 帧 0 负载尾部的 100 字节
        let md = reservoir.assemble(&data, 417, &header, 100).unwrap();
        assert_eq!(md.len(), 100 + 381);
        assert_eq!(md[..100], data[317..417]);
        assert_eq!(md[100..], data[453..834]);
    }

    #[test]
    fn test_历史不足时下溢() {
        let header = stereo_header();
        let data = three_frames();

        // 没有任何历史帧
        let reservoir = BitReservoir::new();
        assert!(reservoir.assemble(&data, 417, &header, 100).is_err());

        // 一帧历史但要求超过其负载容量
        let mut reservoir = BitReservoir::new();
        reservoir.push(417);
        assert!(reservoir.assemble(&data, 417, &header, 400).is_err());
    }

    #[test]
    fn test_窗口滑动保留九帧() {
        let mut reservoir = BitReservoir::new();
        for i in 1..=12usize {
            reservoir.push(100 + i);
        }
        assert_eq!(reservoir.prev_sizes[0], 112);
        assert_eq!(reservoir.prev_sizes[8], 104);
    }

    #[test]
    fn test_截断输入() {
        let header = stereo_header();
        let data = vec![0u8; 400]; // 不足一帧
        let reservoir = BitReservoir::new();
        assert!(matches!(
            reservoir.assemble(&data, 0, &header, 0),
            Err(QinError::Eof)
        ));
    }
}
