//! MP3 帧头解析.
//!
//! 帧头结构 (32 位):
//! ```text
//! AAAA AAAA  AAAB BCCD  EEEE FFGH  IIJJ KLMM
//! A = 同步位 (11 bit, 全1)   B = MPEG 版本    C = 层
//! D = CRC 保护              E = 比特率索引    F = 采样率索引
//! G = 填充位                H = 私有位        I = 声道模式
//! J = 模式扩展              K = 版权         L = 原始/复制
//! M = 强调
//! ```

use qin_core::{QinError, QinResult};

/// MPEG 版本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

/// MPEG Layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegLayer {
    Layer1,
    Layer2,
    Layer3,
}

/// 声道模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

/// MPEG-1 Layer I 比特率表 (kbps), 索引 1-14
const BITRATE_V1_L1: [u32; 15] = [
    0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448,
];

/// MPEG-1 Layer II 比特率表 (kbps), 索引 1-14
const BITRATE_V1_L2: [u32; 15] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384,
];

/// MPEG-1 Layer III 比特率表 (kbps), 索引 1-14
const BITRATE_V1_L3: [u32; 15] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];

/// MPEG-2/2.5 Layer III 比特率表 (kbps), 索引 1-14
const BITRATE_V2_L3: [u32; 15] = [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160];

/// MPEG-1 采样率表, MPEG-2 折半, MPEG-2.5 取四分之一
const SAMPLERATE_V1: [u32; 3] = [44100, 48000, 32000];

/// MP3 帧头
#[derive(Debug, Clone)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: MpegLayer,
    pub has_crc: bool,
    /// 比特率 (bps)
    pub bitrate: u32,
    /// 采样率 (Hz)
    pub sample_rate: u32,
    /// MPEG-1 采样率索引 (0=44100, 1=48000, 2=32000), 用于选择频带表
    pub sample_rate_index: usize,
    pub padding: bool,
    pub mode: ChannelMode,
    /// 模式扩展 (仅 JointStereo 有意义; bit1 = MS stereo, bit0 = intensity)
    pub mode_extension: u8,
    /// 私有位/版权/原始三元组, 解码过程不消费
    pub info: [bool; 3],
    /// 强调方式, 解码过程不消费
    pub emphasis: u8,

    /// 帧总字节数 (含头部)
    pub frame_size: usize,
}

impl FrameHeader {
    /// 解析 4 字节帧头
    pub fn parse(data: &[u8]) -> QinResult<Self> {
        if data.len() < 4 {
            return Err(QinError::Eof);
        }
        // 同步字: 11 位全 1
        if data[0] != 0xFF || (data[1] & 0xE0) != 0xE0 {
            return Err(QinError::InvalidData("无效的帧同步字".into()));
        }

        let version = match (data[1] >> 3) & 0x3 {
            3 => MpegVersion::Mpeg1,
            2 => MpegVersion::Mpeg2,
            0 => MpegVersion::Mpeg25,
            _ => return Err(QinError::InvalidData("保留的 MPEG 版本".into())),
        };

        let layer = match (data[1] >> 1) & 0x3 {
            3 => MpegLayer::Layer1,
            2 => MpegLayer::Layer2,
            1 => MpegLayer::Layer3,
            _ => return Err(QinError::InvalidData("保留的 MPEG 层".into())),
        };

        let has_crc = (data[1] & 0x1) == 0;

        // 比特率索引 0 为自由格式, 15 为非法, 两者都拒绝
        let bitrate_idx = (data[2] >> 4) as usize;
        if bitrate_idx == 0 || bitrate_idx == 15 {
            return Err(QinError::InvalidData(format!(
                "无效的比特率索引: {bitrate_idx}"
            )));
        }

        let bitrate_kbps = match (version, layer) {
            (MpegVersion::Mpeg1, MpegLayer::Layer1) => BITRATE_V1_L1[bitrate_idx],
            (MpegVersion::Mpeg1, MpegLayer::Layer2) => BITRATE_V1_L2[bitrate_idx],
            (MpegVersion::Mpeg1, MpegLayer::Layer3) => BITRATE_V1_L3[bitrate_idx],
            (_, MpegLayer::Layer1) => BITRATE_V1_L2[bitrate_idx],
            (_, _) => BITRATE_V2_L3[bitrate_idx],
        };
        let bitrate = bitrate_kbps * 1000;

        let sample_rate_index = ((data[2] >> 2) & 0x3) as usize;
        if sample_rate_index == 3 {
            return Err(QinError::InvalidData("保留的采样率索引".into()));
        }
        let sample_rate = match version {
            MpegVersion::Mpeg1 => SAMPLERATE_V1[sample_rate_index],
            MpegVersion::Mpeg2 => SAMPLERATE_V1[sample_rate_index] / 2,
            MpegVersion::Mpeg25 => SAMPLERATE_V1[sample_rate_index] / 4,
        };

        let padding = (data[2] >> 1) & 0x1 == 1;

        let mode = match data[3] >> 6 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        };
        let mode_extension = (data[3] >> 4) & 0x3;
        let info = [data[2] & 0x1 == 1, data[3] & 0x8 != 0, data[3] & 0x4 != 0];
        let emphasis = data[3] & 0x3;

        let mut header = Self {
            version,
            layer,
            has_crc,
            bitrate,
            sample_rate,
            sample_rate_index,
            padding,
            mode,
            mode_extension,
            info,
            emphasis,
            frame_size: 0,
        };
        header.frame_size = header.samples_per_frame() / 8 * header.bitrate as usize
            / header.sample_rate as usize
            + usize::from(padding);
        Ok(header)
    }

    /// 每帧采样数 (每声道)
    pub fn samples_per_frame(&self) -> usize {
        match self.layer {
            MpegLayer::Layer1 => 384,
            MpegLayer::Layer2 => 1152,
            MpegLayer::Layer3 => {
                if self.version == MpegVersion::Mpeg1 {
                    1152
                } else {
                    576
                }
            }
        }
    }

    /// 声道数
    pub fn channels(&self) -> usize {
        if self.mode == ChannelMode::Mono { 1 } else { 2 }
    }

    /// 侧边信息字节数 (MPEG-1 Layer III)
    pub fn side_info_len(&self) -> usize {
        if self.mode == ChannelMode::Mono { 17 } else { 32 }
    }

    /// main_data 在帧内的起始偏移: 帧头 + 可选 CRC + 侧边信息
    pub fn data_offset(&self) -> usize {
        4 + if self.has_crc { 2 } else { 0 } + self.side_info_len()
    }

    /// 是否启用 MS stereo (联合立体声且模式扩展 MS 位置位)
    pub fn ms_stereo(&self) -> bool {
        self.mode == ChannelMode::JointStereo && (self.mode_extension & 0x2) != 0
    }
}
