//! # qin-codec
//!
//! Qin 的 MPEG-1 Audio Layer III 解码核心.
//!
//! 解码流水线 (每帧):
//!
//! ```text
//! [同步+帧头] → [侧边信息] → [比特储备库拼接 main_data]
//!     → [比例因子] → [Huffman 样本解码]
//!     → [反量化] → [MS 立体声] → [重排序 | 抗混叠]
//!     → [IMDCT + 加窗 + 重叠相加]
//!     → [频率反转] → [多相合成滤波器组]
//!     → [声道交织] → 1152 个 PCM 采样
//! ```
//!
//! 入口是 [`Mp3Decoder`]: 它持有跨帧状态 (比特储备库窗口, IMDCT 重叠缓冲,
//! 合成滤波器延迟线), 对外提供逐帧拉取式的 [`Mp3Decoder::decode_frame`].

pub mod alias;
pub mod decoder;
pub mod header;
pub mod huffman;
mod huffman_tables;
pub mod imdct;
pub mod main_data;
pub mod reorder;
pub mod requantize;
pub mod scalefactors;
pub mod side_info;
pub mod stereo;
pub mod synthesis;
pub mod tables;

// 重导出常用类型
pub use decoder::{DecodedFrame, Mp3Decoder};
pub use header::{ChannelMode, FrameHeader, MpegLayer, MpegVersion};
pub use side_info::{BlockType, GranuleInfo, SideInfo};
