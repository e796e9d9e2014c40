//! 帧同步: 在字节流中定位第一个有效的 MPEG 音频帧.

use log::debug;
use qin_codec::FrameHeader;
use qin_core::{QinError, QinResult};

/// 同步字搜索的最大范围
const SYNC_SEARCH_LIMIT: usize = 64 * 1024;

/// 从 `start` 开始查找第一个有效帧, 返回其偏移.
///
/// 候选位置的帧头必须能解析, 且按 `frame_size` 前进后的下一个
/// 位置也是有效帧头 (缓冲区在此之前结束时不再要求).
pub fn find_first_frame(data: &[u8], start: usize) -> QinResult<usize> {
    let limit = (start + SYNC_SEARCH_LIMIT).min(data.len());
    let mut pos = start;

    while pos + 4 <= limit {
        if data[pos] == 0xFF && (data[pos + 1] & 0xE0) == 0xE0 {
            if let Ok(header) = FrameHeader::parse(&data[pos..]) {
                let next = pos + header.frame_size;
                if next + 4 > data.len() || FrameHeader::parse(&data[next..]).is_ok() {
                    if pos > start {
                        debug!("同步字在 {start} 之后 {} 字节处", pos - start);
                    }
                    return Ok(pos);
                }
            }
        }
        pos += 1;
    }

    Err(QinError::InvalidData("未找到有效的 MPEG 音频帧".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_frame() -> Vec<u8> {
        let mut frame = vec![0u8; 417];
        frame[0..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        frame
    }

    #[test]
    fn test_起始即同步() {
        let mut data = silent_frame();
        data.extend_from_slice(&silent_frame());
        assert_eq!(find_first_frame(&data, 0).unwrap(), 0);
    }

    #[test]
    fn test_跳过垃圾字节() {
        let mut data = vec![0x00, 0x12, 0x34];
        data.extend_from_slice(&silent_frame());
        data.extend_from_slice(&silent_frame());
        assert_eq!(find_first_frame(&data, 0).unwrap(), 3);
    }

    #[test]
    fn test_伪同步被下一帧校验否决() {
        // 放置一个孤立的伪帧头 (其 frame_size 之后不是帧头),
        // 紧接着是两个真正连续的帧
        let mut data = vec![0xFF, 0xFB, 0x90, 0x00];
        data.extend(std::iter::repeat(0u8).take(100));
        let real_start = data.len();
        data.extend_from_slice(&silent_frame());
        data.extend_from_slice(&silent_frame());
        assert_eq!(find_first_frame(&data, 0).unwrap(), real_start);
    }

    #[test]
    fn test_无同步字报错() {
        let data = vec![0u8; 1024];
        assert!(find_first_frame(&data, 0).is_err());
    }

    #[test]
    fn test_末尾单帧免校验() {
        // 缓冲区恰好只有一帧, 没有"下一帧"可验证
        let data = silent_frame();
        assert_eq!(find_first_frame(&data, 0).unwrap(), 0);
    }
}
