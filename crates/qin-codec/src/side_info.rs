//! MP3 侧边信息 (Side Information) 解析.
//!
//! 紧随帧头 (与可选 CRC) 之后的定长区域, 描述每个 (granule, channel)
//! 如何解析 main_data: 比例因子位宽、Huffman 表选择、量化参数等.

use qin_core::{BitReader, QinError, QinResult};

use crate::header::{ChannelMode, FrameHeader};

/// 窗口类型
///
/// 解码中的重排序、反量化、IMDCT 与比例因子解析都按此分支.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    /// 长块 (普通窗口)
    #[default]
    Long,
    /// 起始块 (长→短过渡)
    Start,
    /// 短块 (3 个 12 点窗口)
    Short,
    /// 结束块 (短→长过渡)
    End,
}

/// 单个 (granule, channel) 的解码参数
#[derive(Debug, Clone, Default)]
pub struct GranuleInfo {
    /// 比例因子与 Huffman 数据的总位数
    pub part2_3_length: u32,
    /// big value 区的取值对数
    pub big_values: u32,
    /// 量化步长
    pub global_gain: u32,
    /// slen1/slen2 的索引
    pub scalefac_compress: usize,
    /// 是否使用非普通窗口
    pub window_switching: bool,
    pub block_type: BlockType,
    /// 最低 2 个子带使用长块比例因子的短块
    pub mixed_block_flag: bool,
    /// 三个 big value 区各自的 Huffman 表号
    pub table_select: [u8; 3],
    /// 短块各窗口的增益偏移
    pub subblock_gain: [u32; 3],
    pub region0_count: u32,
    pub region1_count: u32,
    /// 置位时长块比例因子叠加 pretab
    pub preflag: bool,
    /// 比例因子步长选择 (0 → 0.5, 1 → 1.0)
    pub scalefac_scale: bool,
    /// count1 区的表选择 (false=表A, true=表B)
    pub count1table_select: bool,
}

impl GranuleInfo {
    /// 是否为纯短块或混合块 (决定重排序与 IMDCT 分支)
    pub fn is_short(&self) -> bool {
        self.window_switching && self.block_type == BlockType::Short
    }
}

/// 帧级侧边信息
#[derive(Debug, Clone)]
pub struct SideInfo {
    /// main_data 相对本帧侧边信息末尾向前偏移的字节数
    pub main_data_begin: u32,
    /// 比例因子选择信息 [channel][band]
    pub scfsi: [[bool; 4]; 2],
    /// [granule][channel]
    pub granules: [[GranuleInfo; 2]; 2],
}

impl SideInfo {
    /// 从侧边信息字节区解析 (MPEG-1)
    pub fn parse(reader: &mut BitReader, header: &FrameHeader) -> QinResult<Self> {
        let nch = header.channels();

        let main_data_begin = reader.read_bits(9)?;

        // 私有位, 跳过
        let private_len = if header.mode == ChannelMode::Mono { 5 } else { 3 };
        reader.skip_bits(private_len)?;

        let mut scfsi = [[false; 4]; 2];
        for channel in scfsi.iter_mut().take(nch) {
            for band in channel.iter_mut() {
                *band = reader.read_bool()?;
            }
        }

        let mut granules: [[GranuleInfo; 2]; 2] = Default::default();
        for gr in 0..2 {
            for ch in 0..nch {
                granules[gr][ch] = Self::parse_granule(reader)?;
            }
        }

        Ok(Self {
            main_data_begin,
            scfsi,
            granules,
        })
    }

    fn parse_granule(reader: &mut BitReader) -> QinResult<GranuleInfo> {
        let mut g = GranuleInfo {
            part2_3_length: reader.read_bits(12)?,
            big_values: reader.read_bits(9)?,
            global_gain: reader.read_bits(8)?,
            scalefac_compress: reader.read_bits(4)? as usize,
            window_switching: reader.read_bool()?,
            ..Default::default()
        };

        if g.big_values > 288 {
            return Err(QinError::InvalidData(format!(
                "big_values 超出范围: {}",
                g.big_values
            )));
        }

        if g.window_switching {
            g.block_type = match reader.read_bits(2)? {
                1 => BlockType::Start,
                2 => BlockType::Short,
                3 => BlockType::End,
                _ => {
                    return Err(QinError::InvalidData(
                        "窗口切换下保留的 block_type=0".into(),
                    ));
                }
            };
            g.mixed_block_flag = reader.read_bool()?;

            for region in 0..2 {
                g.table_select[region] = reader.read_bits(5)? as u8;
            }
            for window in 0..3 {
                g.subblock_gain[window] = reader.read_bits(3)?;
            }

            // 窗口切换时 region count 不传输, 使用隐式值
            g.region0_count = if g.block_type == BlockType::Short { 8 } else { 7 };
            g.region1_count = 20 - g.region0_count;
        } else {
            for region in 0..3 {
                g.table_select[region] = reader.read_bits(5)? as u8;
            }
            g.region0_count = reader.read_bits(4)?;
            g.region1_count = reader.read_bits(3)?;
            if g.region0_count + g.region1_count > 20 {
                return Err(QinError::InvalidData(format!(
                    "region count 超出范围: {} + {}",
                    g.region0_count, g.region1_count
                )));
            }
            g.block_type = BlockType::Long;
        }

        g.preflag = reader.read_bool()?;
        g.scalefac_scale = reader.read_bool()?;
        g.count1table_select = reader.read_bool()?;

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::FrameHeader;

    fn stereo_header() -> FrameHeader {
        FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x00]).unwrap()
    }

    fn mono_header() -> FrameHeader {
        FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0xC0]).unwrap()
    }

    #[test]
    fn test_全零侧边信息_立体声() {
        let header = stereo_header();
        let data = [0u8; 32];
        let mut reader = BitReader::new(&data);
        let si = SideInfo::parse(&mut reader, &header).unwrap();

        assert_eq!(si.main_data_begin, 0);
        assert_eq!(reader.bit_offset(), 256);
        for gr in 0..2 {
            for ch in 0..2 {
                let g = &si.granules[gr][ch];
                assert_eq!(g.part2_3_length, 0);
                assert_eq!(g.big_values, 0);
                assert!(!g.window_switching);
                assert_eq!(g.block_type, BlockType::Long);
            }
        }
    }

    #[test]
    fn test_全零侧边信息_单声道() {
        let header = mono_header();
        let data = [0u8; 17];
        let mut reader = BitReader::new(&data);
        let si = SideInfo::parse(&mut reader, &header).unwrap();
        assert_eq!(reader.bit_offset(), 136);
        assert_eq!(si.main_data_begin, 0);
    }

    #[test]
    fn test_main_data_begin_位宽() {
        let header = mono_header();
        // 前 9 位全 1 -> main_data_begin = 511
        let mut data = [0u8; 17];
        data[0] = 0xFF;
        data[1] = 0x80;
        let mut reader = BitReader::new(&data);
        let si = SideInfo::parse(&mut reader, &header).unwrap();
        assert_eq!(si.main_data_begin, 511);
    }

    #[test]
    fn test_窗口切换的隐式region() {
        // 手工构造单声道侧边信息: granule 0 设置 window_switching,
        // block_type=2 (短块), mixed=0
        let header = mono_header();
        let push = |val: u32, n: u32, bits: &mut Vec<bool>| {
            for i in (0..n).rev() {
                bits.push((val >> i) & 1 == 1);
            }
        };
        let mut v = Vec::new();
        push(0, 9, &mut v); // main_data_begin
        push(0, 5, &mut v); // private
        push(0, 4, &mut v); // scfsi
        // granule 0
        push(0, 12, &mut v); // part2_3_length
        push(0, 9, &mut v); // big_values
        push(210, 8, &mut v); // global_gain
        push(0, 4, &mut v); // scalefac_compress
        push(1, 1, &mut v); // window_switching
        push(2, 2, &mut v); // block_type = short
        push(0, 1, &mut v); // mixed_block_flag
        push(0, 5, &mut v); // table_select[0]
        push(0, 5, &mut v); // table_select[1]
        push(0, 9, &mut v); // subblock_gain x3
        push(0, 3, &mut v); // preflag + scalefac_scale + count1table
        // granule 1: 普通长块
        push(0, 59, &mut v);

        let mut data = [0u8; 17];
        for (i, bit) in v.iter().enumerate() {
            if *bit {
                data[i / 8] |= 0x80 >> (i % 8);
            }
        }
        let mut reader = BitReader::new(&data);
        let si = SideInfo::parse(&mut reader, &header).unwrap();
        let g = &si.granules[0][0];
        assert!(g.window_switching);
        assert_eq!(g.block_type, BlockType::Short);
        assert_eq!(g.global_gain, 210);
        assert_eq!(g.region0_count, 8);
        assert_eq!(g.region1_count, 12);
    }
}
