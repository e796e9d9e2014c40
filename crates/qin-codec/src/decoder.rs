//! MP3 解码器主流程.
//!
//! [`Mp3Decoder`] 持有全部跨帧状态: 比特储备库的帧大小窗口、
//! 每声道的 IMDCT 重叠缓冲与合成滤波器延迟线, 以及构造时建好的
//! Huffman 查找表、IMDCT 窗口和合成窗口/余弦矩阵.
//!
//! 解码是拉取式的: 外层循环持有完整输入缓冲区, 每次以当前帧头的
//! 偏移调用 [`Mp3Decoder::decode_frame`], 再按返回头部的 `frame_size`
//! 前进. 帧与帧之间由于比特储备库、重叠相加与延迟线的存在是
//! 历史相关的, 不允许乱序或跳帧.

use log::trace;
use qin_core::{BitReader, QinError, QinResult};

use crate::alias::alias_reduction;
use crate::header::{FrameHeader, MpegLayer, MpegVersion};
use crate::huffman::HuffmanDecoder;
use crate::imdct::ImdctWindows;
use crate::main_data::BitReservoir;
use crate::reorder::reorder;
use crate::requantize::requantize;
use crate::scalefactors::{self, Scalefactors};
use crate::side_info::SideInfo;
use crate::stereo::ms_stereo;
use crate::synthesis::{SynthFilter, SynthState, frequency_inversion};

/// 一帧的解码结果
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// 本帧的帧头 (含 frame_size, 用于前进游标)
    pub header: FrameHeader,
    /// 交织 PCM, 每声道 1152 个采样, 顺序为 (granule, sample, channel)
    pub pcm: Vec<f32>,
}

/// MPEG-1 Layer III 解码器
pub struct Mp3Decoder {
    reservoir: BitReservoir,
    /// IMDCT 重叠缓冲 [channel][subband][sample]
    overlap: [[[f32; 18]; 32]; 2],
    /// 合成滤波器延迟线 (每声道)
    synth_state: [SynthState; 2],

    huffman: HuffmanDecoder,
    windows: ImdctWindows,
    synth: SynthFilter,
}

impl Default for Mp3Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Mp3Decoder {
    pub fn new() -> Self {
        Self {
            reservoir: BitReservoir::new(),
            overlap: [[[0.0; 18]; 32]; 2],
            synth_state: Default::default(),
            huffman: HuffmanDecoder::new(),
            windows: ImdctWindows::new(),
            synth: SynthFilter::new(),
        }
    }

    /// 清空跨帧状态 (重新开始解码另一条流时使用)
    pub fn reset(&mut self) {
        self.reservoir.reset();
        self.overlap = [[[0.0; 18]; 32]; 2];
        for state in self.synth_state.iter_mut() {
            state.reset();
        }
    }

    /// 解码位于 `data[offset..]` 的一帧.
    ///
    /// 输入不足一帧时返回 [`QinError::Eof`]; 结构性错误返回
    /// [`QinError::InvalidData`], 此时应终止解码.
    pub fn decode_frame(&mut self, data: &[u8], offset: usize) -> QinResult<DecodedFrame> {
        if offset + 4 > data.len() {
            return Err(QinError::Eof);
        }
        let header = FrameHeader::parse(&data[offset..])?;
        if header.version != MpegVersion::Mpeg1 || header.layer != MpegLayer::Layer3 {
            return Err(QinError::Unsupported(
                "仅支持 MPEG-1 Layer III".into(),
            ));
        }
        if offset + header.frame_size > data.len() {
            return Err(QinError::Eof);
        }

        let nch = header.channels();
        trace!(
            "帧 @{offset}: {}Hz {}ch {}kbps, {} 字节",
            header.sample_rate,
            nch,
            header.bitrate / 1000,
            header.frame_size
        );

        // 侧边信息紧随帧头与可选的 CRC 之后
        let side_start = offset + 4 + if header.has_crc { 2 } else { 0 };
        let side_info = {
            let mut reader = BitReader::new(&data[side_start..side_start + header.side_info_len()]);
            SideInfo::parse(&mut reader, &header)?
        };

        let main_data = self.reservoir.assemble(
            data,
            offset,
            &header,
            side_info.main_data_begin as usize,
        )?;
        let mut reader = BitReader::new(&main_data);

        let mut pcm = Vec::with_capacity(header.samples_per_frame() * nch);
        let mut sf_gr0: [Scalefactors; 2] = Default::default();
        let mut samples = [0i32; 576];
        let sr_index = header.sample_rate_index;

        for gr in 0..2 {
            let mut spectrum = [[0.0f32; 576]; 2];

            for ch in 0..nch {
                let granule = &side_info.granules[gr][ch];
                let part2_start = reader.bit_offset();

                let sf = scalefactors::unpack(
                    &mut reader,
                    granule,
                    &side_info.scfsi[ch],
                    gr,
                    if gr == 1 { Some(&sf_gr0[ch]) } else { None },
                )?;

                self.huffman
                    .unpack_samples(&mut reader, granule, sr_index, part2_start, &mut samples)?;
                // part2_3_length 恰好覆盖比例因子与 Huffman 位
                reader.seek_to_bit(part2_start + granule.part2_3_length as usize);

                requantize(granule, &sf, &samples, &mut spectrum[ch], sr_index);

                if gr == 0 {
                    sf_gr0[ch] = sf;
                }
            }

            if nch == 2 && header.ms_stereo() {
                let (left, right) = spectrum.split_at_mut(1);
                ms_stereo(&mut left[0], &mut right[0]);
            }

            let mut pcm_gr = [[0.0f32; 576]; 2];
            for ch in 0..nch {
                let granule = &side_info.granules[gr][ch];

                reorder(granule, &mut spectrum[ch], sr_index);
                alias_reduction(granule, &mut spectrum[ch]);

                let mut time_samples = [0.0f32; 576];
                self.windows.process(
                    granule,
                    &spectrum[ch],
                    &mut self.overlap[ch],
                    &mut time_samples,
                );
                frequency_inversion(&mut time_samples);

                // 多相合成: 18 个时隙, 每时隙 32 个子带样本
                let state = &mut self.synth_state[ch];
                for slot in 0..18 {
                    let mut subband = [0.0f32; 32];
                    for (sb, value) in subband.iter_mut().enumerate() {
                        *value = time_samples[sb * 18 + slot];
                    }
                    let mut slot_pcm = [0.0f32; 32];
                    self.synth.process(state, &subband, &mut slot_pcm);
                    pcm_gr[ch][slot * 32..slot * 32 + 32].copy_from_slice(&slot_pcm);
                }
            }

            // 声道交织输出
            for i in 0..576 {
                for channel in pcm_gr.iter().take(nch) {
                    pcm.push(channel[i]);
                }
            }
        }

        self.reservoir.push(header.frame_size);
        Ok(DecodedFrame { header, pcm })
    }
}
