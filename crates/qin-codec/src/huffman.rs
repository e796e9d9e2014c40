//! MP3 Huffman 解码.
//!
//! 576 个频谱样本分为三段: big value 区 (按对解码, 32 张表),
//! count1 区 (按四元组解码, 表 A/B 二选一), 其余补零.
//!
//! big value 表使用快速查找表解码: 预窥 `PEEK_BITS` 位直接查表,
//! 更长的码字退回溢出表线性匹配. 所有查找表在构造时一次建好.

use qin_core::{BitReader, QinError, QinResult};

use crate::huffman_tables::{COUNT1A_CODES, COUNT1A_LENS, LINBITS, MAX_VALUE, codebook};
use crate::side_info::GranuleInfo;
use crate::tables::BAND_INDEX_LONG;

/// 快速查找表的预窥位数
const PEEK_BITS: usize = 10;
const PEEK_SIZE: usize = 1 << PEEK_BITS;

/// count1 表 A 的最大码长
const COUNT1A_PEEK_BITS: usize = 6;
const COUNT1A_PEEK_SIZE: usize = 1 << COUNT1A_PEEK_BITS;

/// 查找表条目
#[derive(Debug, Clone, Copy, Default)]
struct LutEntry {
    /// 解码后的符号 (x<<4 | y, 或 count1 的 v<<3|w<<2|x<<1|y)
    symbol: u8,
    /// 消费的位数 (0 表示未命中)
    bits: u8,
}

/// 单张 big value 表的查找结构
#[derive(Debug, Clone, Default)]
struct BigValueTable {
    /// 码长 <= PEEK_BITS 的直接查找表
    lut: Vec<LutEntry>,
    /// 长码条目 (code, len, symbol)
    overflow: Vec<(u16, u8, u8)>,
    max_len: u8,
}

impl BigValueTable {
    fn build(table_id: u8) -> Self {
        let Some((codes, lens, wrap)) = codebook(table_id) else {
            return Self::default();
        };

        let mut table = Self {
            lut: vec![LutEntry::default(); PEEK_SIZE],
            overflow: Vec::new(),
            max_len: 0,
        };
        for (i, (&code, &len)) in codes.iter().zip(lens.iter()).enumerate() {
            if len == 0 {
                continue;
            }
            let symbol = (((i / wrap) as u8) << 4) | (i % wrap) as u8;
            table.max_len = table.max_len.max(len);
            if (len as usize) <= PEEK_BITS {
                let pad = PEEK_BITS - len as usize;
                let base = (code as usize) << pad;
                for j in 0..(1usize << pad) {
                    table.lut[base | j] = LutEntry { symbol, bits: len };
                }
            } else {
                table.overflow.push((code, len, symbol));
            }
        }
        table
    }

    fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }
}

/// MP3 Huffman 解码器
///
/// 所有查找表在 [`HuffmanDecoder::new`] 中建立, 解码热路径无惰性初始化.
pub struct HuffmanDecoder {
    big_value: Vec<BigValueTable>,
    count1a: [LutEntry; COUNT1A_PEEK_SIZE],
}

impl Default for HuffmanDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HuffmanDecoder {
    pub fn new() -> Self {
        let big_value = (0..32).map(|id| BigValueTable::build(id as u8)).collect();

        let mut count1a = [LutEntry::default(); COUNT1A_PEEK_SIZE];
        for symbol in 0..16u8 {
            let len = COUNT1A_LENS[symbol as usize];
            let code = COUNT1A_CODES[symbol as usize] as usize;
            let pad = COUNT1A_PEEK_BITS - len as usize;
            let base = code << pad;
            for j in 0..(1usize << pad) {
                count1a[base | j] = LutEntry { symbol, bits: len };
            }
        }

        Self { big_value, count1a }
    }

    /// 解码 big value 区的一对样本 (x, y)
    pub fn decode_pair(&self, reader: &mut BitReader, table_id: u8) -> QinResult<(i32, i32)> {
        if table_id == 0 {
            // 表 0 不消费任何位, 输出 (0, 0)
            return Ok((0, 0));
        }
        let table = self
            .big_value
            .get(table_id as usize)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| QinError::InvalidData(format!("保留的 Huffman 表: {table_id}")))?;

        let symbol = self.decode_symbol(reader, table)?;
        let linbits = LINBITS[table_id as usize];
        let escape = MAX_VALUE[table_id as usize] as i32 - 1;

        let mut x = i32::from(symbol >> 4);
        let mut y = i32::from(symbol & 0x0F);

        // linbits 扩展样本幅度, 之后读符号位
        if linbits != 0 && x == escape {
            x += reader.read_bits(linbits)? as i32;
        }
        if x != 0 && reader.read_bool()? {
            x = -x;
        }
        if linbits != 0 && y == escape {
            y += reader.read_bits(linbits)? as i32;
        }
        if y != 0 && reader.read_bool()? {
            y = -y;
        }

        Ok((x, y))
    }

    /// VLC 符号解码: 快速路径查表, 长码走溢出表
    fn decode_symbol(&self, reader: &mut BitReader, table: &BigValueTable) -> QinResult<u8> {
        let bits_left = reader.bits_left();

        if bits_left >= PEEK_BITS {
            let peek = reader.peek_bits(PEEK_BITS as u32)? as usize;
            let entry = table.lut[peek];
            if entry.bits > 0 {
                reader.skip_bits(entry.bits as usize)?;
                return Ok(entry.symbol);
            }
        } else if bits_left > 0 {
            // 尾部: 剩余位不足预窥窗口, 左对齐后查表
            let peek = reader.peek_bits(bits_left as u32)? as usize;
            let entry = table.lut[peek << (PEEK_BITS - bits_left)];
            if entry.bits > 0 && (entry.bits as usize) <= bits_left {
                reader.skip_bits(entry.bits as usize)?;
                return Ok(entry.symbol);
            }
        }

        // 溢出表: 按码长递增逐一尝试.
        // 不能一次 peek max_len 位再统一比较: 剩余位数不足时会误伤合法短码.
        for len in (PEEK_BITS as u8 + 1)..=table.max_len {
            let Ok(bits) = reader.peek_bits(u32::from(len)) else {
                break;
            };
            for &(code, code_len, symbol) in &table.overflow {
                if code_len == len && bits == u32::from(code) {
                    reader.skip_bits(len as usize)?;
                    return Ok(symbol);
                }
            }
        }

        Err(QinError::InvalidData("Huffman 码字无匹配".into()))
    }

    /// 解码 count1 区的一个四元组 (v, w, x, y)
    pub fn decode_quad(
        &self,
        reader: &mut BitReader,
        table_b: bool,
    ) -> QinResult<(i32, i32, i32, i32)> {
        let symbol = if table_b {
            // 表 B: 固定 4 位, 逐位取反
            15 - reader.read_bits(4)? as u8
        } else {
            let bits_left = reader.bits_left();
            if bits_left == 0 {
                return Err(QinError::Eof);
            }
            let probe = bits_left.min(COUNT1A_PEEK_BITS);
            let peek = reader.peek_bits(probe as u32)? as usize;
            let entry = self.count1a[peek << (COUNT1A_PEEK_BITS - probe)];
            if entry.bits == 0 || (entry.bits as usize) > bits_left {
                return Err(QinError::InvalidData("count1 码字无匹配".into()));
            }
            reader.skip_bits(entry.bits as usize)?;
            entry.symbol
        };

        // 符号位按 v, w, x, y 顺序跟在非零值之后
        let mut quad = [0i32; 4];
        for (i, value) in quad.iter_mut().enumerate() {
            if symbol & (0x8 >> i) != 0 {
                *value = if reader.read_bool()? { -1 } else { 1 };
            }
        }
        Ok((quad[0], quad[1], quad[2], quad[3]))
    }

    /// 解码一个 (granule, channel) 的全部 576 个整数样本.
    ///
    /// `part2_start` 为该 granule 的 part2_3 区域起始位偏移;
    /// 调用前游标应已越过比例因子.
    pub fn unpack_samples(
        &self,
        reader: &mut BitReader,
        granule: &GranuleInfo,
        sr_index: usize,
        part2_start: usize,
        samples: &mut [i32; 576],
    ) -> QinResult<()> {
        samples.fill(0);
        let end_bit = part2_start + granule.part2_3_length as usize;

        // big value 区边界
        let (region1_start, region2_start) = if granule.is_short() {
            (36, 576)
        } else {
            let long = &BAND_INDEX_LONG[sr_index];
            let r0 = (granule.region0_count + 1) as usize;
            let r1 = r0 + (granule.region1_count + 1) as usize;
            (long[r0.min(22)], long[r1.min(22)])
        };

        let big_value_end = (granule.big_values as usize * 2).min(576);
        let mut sample = 0;
        while sample < big_value_end {
            if reader.bit_offset() >= end_bit {
                break;
            }
            let table_id = if sample < region1_start {
                granule.table_select[0]
            } else if sample < region2_start {
                granule.table_select[1]
            } else {
                granule.table_select[2]
            };

            let (x, y) = self.decode_pair(reader, table_id)?;
            samples[sample] = x;
            samples[sample + 1] = y;
            sample += 2;
        }

        // count1 区: 解码到位预算耗尽或样本填满
        while sample <= 572 && reader.bit_offset() < end_bit {
            let (v, w, x, y) = self.decode_quad(reader, granule.count1table_select)?;
            samples[sample] = v;
            samples[sample + 1] = w;
            samples[sample + 2] = x;
            samples[sample + 3] = y;
            sample += 4;
        }

        // 末组四元组若越过 part2_3 边界, 其取值不可信, 整组丢弃
        if reader.bit_offset() > end_bit && sample > big_value_end {
            sample -= 4;
            for value in samples.iter_mut().skip(sample).take(4) {
                *value = 0;
            }
        }

        Ok(())
    }
}
