//! Xing/Info 头解析.
//!
//! VBR 文件的第一个 MPEG 帧通常不含音频, 而在负载里携带 "Xing"
//! (VBR) 或 "Info" (CBR) 索引:
//! ```text
//! | ID (4) | 标志 (4, 大端) | 帧数 (可选 4) | 字节数 (可选 4) |
//! | TOC (可选 100) | 质量 (可选 4) |
//! ```
//! 标志低 4 位依次表示帧数、字节数、TOC、质量是否存在.

use log::debug;

/// Xing/Info 头
#[derive(Debug, Clone)]
pub struct XingHeader {
    /// true 表示 "Info" (CBR), false 表示 "Xing" (VBR)
    pub is_cbr: bool,
    /// 文件总帧数
    pub frame_count: Option<u32>,
    /// 文件总字节数
    pub byte_count: Option<u32>,
    /// 100 点查找表 (用于按时间估算字节偏移)
    pub toc: Option<[u8; 100]>,
    /// 质量指示 (0 最好, 100 最差)
    pub quality: Option<u8>,
}

impl XingHeader {
    /// 在第一帧的字节区间内查找并解析 Xing/Info 头.
    ///
    /// 标签在帧内的确切偏移取决于编码器, 因此在下一个同步字之前
    /// 逐字节扫描.
    pub fn find(frame: &[u8]) -> Option<Self> {
        // 跳过帧头本身, 从负载区开始找
        let mut offset = 4;
        while offset + 8 <= frame.len() {
            let id = &frame[offset..offset + 4];
            if id == b"Xing" || id == b"Info" {
                return Self::parse_at(frame, offset);
            }
            // 扫描到下一个同步字即放弃
            if frame[offset] == 0xFF && (frame[offset + 1] & 0xE0) == 0xE0 {
                return None;
            }
            offset += 1;
        }
        None
    }

    fn parse_at(frame: &[u8], offset: usize) -> Option<Self> {
        let is_cbr = &frame[offset..offset + 4] == b"Info";
        let mut pos = offset + 4;

        let read_u32 = |pos: &mut usize| -> Option<u32> {
            if *pos + 4 > frame.len() {
                return None;
            }
            let value = u32::from_be_bytes(frame[*pos..*pos + 4].try_into().unwrap());
            *pos += 4;
            Some(value)
        };

        let flags = read_u32(&mut pos)?;
        let mut header = Self {
            is_cbr,
            frame_count: None,
            byte_count: None,
            toc: None,
            quality: None,
        };

        if flags & 0x1 != 0 {
            header.frame_count = Some(read_u32(&mut pos)?);
        }
        if flags & 0x2 != 0 {
            header.byte_count = Some(read_u32(&mut pos)?);
        }
        if flags & 0x4 != 0 {
            if pos + 100 > frame.len() {
                return None;
            }
            let mut toc = [0u8; 100];
            toc.copy_from_slice(&frame[pos..pos + 100]);
            header.toc = Some(toc);
            pos += 100;
        }
        if flags & 0x8 != 0 {
            // 质量存放在最后 4 字节的低字节
            header.quality = Some((read_u32(&mut pos)? & 0xFF) as u8);
        }

        debug!(
            "发现 {} 头: frames={:?}, bytes={:?}, quality={:?}",
            if is_cbr { "Info" } else { "Xing" },
            header.frame_count,
            header.byte_count,
            header.quality
        );
        Some(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 在 417 字节的帧壳里放置一个 Xing 头
    fn frame_with_xing(id: &[u8; 4], flags: u32, fields: &[u32]) -> Vec<u8> {
        let mut frame = vec![0u8; 417];
        frame[0..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        // 立体声无 CRC: Xing 头惯例放在侧边信息之后 (偏移 36)
        let mut pos = 36;
        frame[pos..pos + 4].copy_from_slice(id);
        pos += 4;
        frame[pos..pos + 4].copy_from_slice(&flags.to_be_bytes());
        pos += 4;
        for field in fields {
            frame[pos..pos + 4].copy_from_slice(&field.to_be_bytes());
            pos += 4;
        }
        frame
    }

    #[test]
    fn test_xing_帧数与字节数() {
        let frame = frame_with_xing(b"Xing", 0x3, &[1000, 417_000]);
        let header = XingHeader::find(&frame).unwrap();
        assert!(!header.is_cbr);
        assert_eq!(header.frame_count, Some(1000));
        assert_eq!(header.byte_count, Some(417_000));
        assert!(header.toc.is_none());
        assert!(header.quality.is_none());
    }

    #[test]
    fn test_info_仅质量() {
        let frame = frame_with_xing(b"Info", 0x8, &[78]);
        let header = XingHeader::find(&frame).unwrap();
        assert!(header.is_cbr);
        assert_eq!(header.quality, Some(78));
        assert!(header.frame_count.is_none());
    }

    #[test]
    fn test_质量取低字节() {
        let frame = frame_with_xing(b"Xing", 0x8, &[0xDEAD_BE64]);
        let header = XingHeader::find(&frame).unwrap();
        assert_eq!(header.quality, Some(0x64));
    }

    #[test]
    fn test_toc_偏移后仍取质量() {
        let mut frame = vec![0u8; 417];
        frame[0..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        let mut pos = 36;
        frame[pos..pos + 4].copy_from_slice(b"Xing");
        pos += 4;
        frame[pos..pos + 4].copy_from_slice(&0xCu32.to_be_bytes()); // TOC + 质量
        pos += 4;
        for i in 0..100 {
            frame[pos + i] = i as u8;
        }
        pos += 100;
        frame[pos..pos + 4].copy_from_slice(&55u32.to_be_bytes());

        let header = XingHeader::find(&frame).unwrap();
        let toc = header.toc.unwrap();
        assert_eq!(toc[99], 99);
        assert_eq!(header.quality, Some(55));
    }

    #[test]
    fn test_无标签() {
        let mut frame = vec![0u8; 417];
        frame[0..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        assert!(XingHeader::find(&frame).is_none());
    }
}
