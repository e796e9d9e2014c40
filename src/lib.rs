//! # Qin (琴)
//!
//! 纯 Rust 实现的 MPEG-1 Audio Layer III 解码器.
//!
//! Qin 把一段连续的 MP3 字节缓冲解码为交错的 32 位浮点 PCM,
//! 支持 44.1/48/32 kHz 的 MPEG-1 Layer III 码流.
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use qin::codec::Mp3Decoder;
//! use qin::format::{id3, sync};
//!
//! let data = std::fs::read("song.mp3").unwrap();
//! let mut offset = id3::skip_tags(&data);
//! offset = sync::find_first_frame(&data, offset).unwrap();
//!
//! let mut decoder = Mp3Decoder::new();
//! while let Ok(frame) = decoder.decode_frame(&data, offset) {
//!     // frame.pcm: 每声道 1152 个交错 f32 采样
//!     offset += frame.header.frame_size;
//! }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `qin-core` | 错误类型与比特流读取 |
//! | `qin-codec` | MPEG-1 Layer III 解码核心 |
//! | `qin-format` | ID3v2 / Xing / 帧同步 |

/// 错误类型与比特流读取
pub use qin_core as core;

/// MPEG-1 Layer III 解码核心
pub use qin_codec as codec;

/// 容器层: ID3v2 / Xing / 帧同步
pub use qin_format as format;

/// 获取 Qin 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
