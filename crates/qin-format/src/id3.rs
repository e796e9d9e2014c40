//! ID3v2 标签解析与跳过.
//!
//! 标签结构:
//! ```text
//! | "ID3" | 版本 (2 字节) | 标志 (1 字节) | 大小 (4 字节 synchsafe) |
//! | 帧... | 页脚 (可选, 10 字节) |
//! ```
//!
//! 标签内容与解码无关, 解码器只需要它的总长度来定位第一个音频帧;
//! 文本帧 (T***) 顺带解析出来供上层展示.

use log::debug;

/// 大小字段的 synchsafe 编码: 每字节只取低 7 位, MSB first
fn synchsafe(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take(4)
        .fold(0usize, |acc, &b| (acc << 7) | (b & 0x7F) as usize)
}

/// 一个 ID3v2 标签
#[derive(Debug, Clone)]
pub struct Id3Tag {
    /// 版本 (主, 修订)
    pub version: (u8, u8),
    /// 标志字节的高 4 位
    pub flags: u8,
    /// 标签体长度 (不含 10 字节头与可选页脚)
    pub body_len: usize,
    /// 是否存在页脚
    pub has_footer: bool,
    /// 解析出的文本帧 (帧 ID, 内容)
    pub text_frames: Vec<(String, String)>,
}

impl Id3Tag {
    /// 标签总长度 (头 + 体 + 可选页脚)
    pub fn total_len(&self) -> usize {
        10 + self.body_len + if self.has_footer { 10 } else { 0 }
    }

    /// 尝试从缓冲区头部解析一个 ID3v2 标签.
    ///
    /// 不是标签 (或标志字节低 4 位非零) 时返回 `None`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 10 || &data[0..3] != b"ID3" {
            return None;
        }
        let flags = data[5];
        // 标志字节的低 4 位必须为零
        if flags & 0x0F != 0 {
            return None;
        }

        let body_len = synchsafe(&data[6..10]);
        let has_footer = flags & 0x10 != 0;
        let mut tag = Self {
            version: (data[3], data[4]),
            flags: flags >> 4,
            body_len,
            has_footer,
            text_frames: Vec::new(),
        };

        let body_end = (10 + body_len).min(data.len());
        tag.parse_text_frames(&data[10..body_end]);
        Some(tag)
    }

    /// 遍历标签体中的帧, 收集文本帧.
    ///
    /// 帧结构: 4 字节 ASCII ID + 4 字节 synchsafe 长度 + 2 标志字节 + 负载.
    fn parse_text_frames(&mut self, body: &[u8]) {
        let mut pos = 0;
        while pos + 10 <= body.len() {
            let id = &body[pos..pos + 4];
            if !id.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
                break;
            }
            let frame_len = synchsafe(&body[pos + 4..pos + 8]);
            if frame_len == 0 || pos + 10 + frame_len > body.len() {
                break;
            }
            let payload = &body[pos + 10..pos + 10 + frame_len];

            if id[0] == b'T' && !payload.is_empty() {
                // 负载首字节是文本编码, 其余按 UTF-8 宽松转换
                let text: String = String::from_utf8_lossy(&payload[1..])
                    .trim_end_matches('\0')
                    .to_string();
                let id = String::from_utf8_lossy(id).to_string();
                self.text_frames.push((id, text));
            }

            pos += 10 + frame_len;
        }
    }
}

/// 跳过缓冲区头部所有连续的 ID3v2 标签, 返回其后的偏移
pub fn skip_tags(data: &[u8]) -> usize {
    let mut offset = 0;
    while let Some(tag) = Id3Tag::parse(&data[offset..]) {
        debug!(
            "跳过 ID3v2.{}.{} 标签, {} 字节, {} 个文本帧",
            tag.version.0,
            tag.version.1,
            tag.total_len(),
            tag.text_frames.len()
        );
        offset += tag.total_len();
        if offset >= data.len() {
            break;
        }
    }
    offset.min(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构造一个带单个 TIT2 文本帧的标签
    fn tag_with_title(title: &str) -> Vec<u8> {
        let payload_len = 1 + title.len();
        let body_len = 10 + payload_len;
        let mut data = Vec::new();
        data.extend_from_slice(b"ID3");
        data.push(4); // 版本
        data.push(0);
        data.push(0); // 标志
        data.extend_from_slice(&encode_synchsafe(body_len));
        // TIT2 帧
        data.extend_from_slice(b"TIT2");
        data.extend_from_slice(&encode_synchsafe(payload_len));
        data.extend_from_slice(&[0, 0]); // 帧标志
        data.push(3); // UTF-8 编码标记
        data.extend_from_slice(title.as_bytes());
        data
    }

    fn encode_synchsafe(value: usize) -> [u8; 4] {
        [
            ((value >> 21) & 0x7F) as u8,
            ((value >> 14) & 0x7F) as u8,
            ((value >> 7) & 0x7F) as u8,
            (value & 0x7F) as u8,
        ]
    }

    #[test]
    fn test_标签解析() {
        let data = tag_with_title("夜曲");
        let tag = Id3Tag::parse(&data).unwrap();
        assert_eq!(tag.version.0, 4);
        assert!(!tag.has_footer);
        assert_eq!(tag.total_len(), data.len());
        assert_eq!(tag.text_frames.len(), 1);
        assert_eq!(tag.text_frames[0].0, "TIT2");
        assert_eq!(tag.text_frames[0].1, "夜曲");
    }

    #[test]
    fn test_synchsafe_编码() {
        // 每字节 7 位: [0, 0, 2, 1] -> 0b10_0000001 = 257
        assert_eq!(synchsafe(&[0, 0, 2, 1]), 257);
        assert_eq!(synchsafe(&[0, 0, 0, 0x7F]), 127);
        // 最高位被忽略
        assert_eq!(synchsafe(&[0x80, 0x80, 0x80, 0xFF]), 127);
    }

    #[test]
    fn test_非标签返回None() {
        assert!(Id3Tag::parse(b"NOT A TAG.").is_none());
        assert!(Id3Tag::parse(&[0xFF, 0xFB, 0x90, 0x00]).is_none());
        // 标志字节低 4 位非零
        let mut data = tag_with_title("x");
        data[5] = 0x01;
        assert!(Id3Tag::parse(&data).is_none());
    }

    #[test]
    fn test_页脚计入总长() {
        let mut data = tag_with_title("x");
        data[5] = 0x10; // 页脚标志
        let without_footer = tag_with_title("x");
        let tag = Id3Tag::parse(&data).unwrap();
        assert!(tag.has_footer);
        assert_eq!(tag.total_len(), without_footer.len() + 10);
    }

    #[test]
    fn test_跳过连续标签() {
        let mut data = Vec::new();
        data.extend_from_slice(&tag_with_title("一"));
        data.extend_from_slice(&tag_with_title("二"));
        data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);

        let offset = skip_tags(&data);
        assert_eq!(offset, data.len() - 4);
        assert_eq!(&data[offset..offset + 2], &[0xFF, 0xFB]);
    }

    #[test]
    fn test_无标签不前进() {
        let data = [0xFF, 0xFB, 0x90, 0x00];
        assert_eq!(skip_tags(&data), 0);
    }
}
