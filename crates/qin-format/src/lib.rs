//! # qin-format
//!
//! MP3 文件的容器层: 解码核心之外的外围解析.
//!
//! MP3 文件结构:
//! ```text
//! [ID3v2 标签 (可选, 可多个)]
//! [Xing/Info 帧 (可选, VBR 索引)]
//! [MPEG 音频帧 #0]
//! [MPEG 音频帧 #1]
//! ...
//! ```
//!
//! 本 crate 负责跳过标签、定位第一个音频帧、解析 Xing/Info 索引;
//! 压缩帧本身交给 `qin-codec` 解码.

pub mod id3;
pub mod sync;
pub mod xing;

// 重导出常用类型
pub use id3::Id3Tag;
pub use sync::find_first_frame;
pub use xing::XingHeader;
