//! qin-cli - MP3 解码命令行工具.
//!
//! 把 MPEG-1 Layer III 文件解码为交错的 f32le 原始 PCM,
//! 默认写到标准输出, 便于接到 `aplay` / `ffplay` 等播放器:
//!
//! ```text
//! qin-cli song.mp3 | aplay -f FLOAT_LE -r 44100 -c 2
//! qin-cli song.mp3 -o song.pcm
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};

use qin_codec::Mp3Decoder;
use qin_core::QinError;
use qin_format::{XingHeader, id3, sync};

/// Qin MP3 解码器
#[derive(Parser, Debug)]
#[command(name = "qin-cli", version, about = "纯 Rust MPEG-1 Layer III 解码器")]
struct Cli {
    /// 输入 MP3 文件路径
    input: PathBuf,

    /// 输出文件路径 (f32le 交错 PCM; 省略时写到标准输出)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 静默模式 (不打印流信息)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("错误: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = fs::read(&cli.input)
        .with_context(|| format!("无法读取输入文件 '{}'", cli.input.display()))?;

    // 1) 跳过 ID3v2 标签 (可能有多个), 顺带收集文本帧
    let mut offset = 0;
    while let Some(tag) = id3::Id3Tag::parse(&data[offset..]) {
        if !cli.quiet {
            for (id, text) in &tag.text_frames {
                eprintln!("标签 {id}: {text}");
            }
        }
        offset += tag.total_len();
        if offset >= data.len() {
            bail!("文件只包含 ID3 标签, 没有音频帧");
        }
    }

    // 2) 定位第一个有效帧
    offset = sync::find_first_frame(&data, offset)?;

    // 3) Xing/Info 帧本身不含音频, 识别后跳过
    let first = qin_codec::FrameHeader::parse(&data[offset..])?;
    let frame_end = (offset + first.frame_size).min(data.len());
    if let Some(xing) = XingHeader::find(&data[offset..frame_end]) {
        info!(
            "跳过 {} 帧, 总帧数 {:?}",
            if xing.is_cbr { "Info" } else { "Xing" },
            xing.frame_count
        );
        offset += first.frame_size;
    }

    if !cli.quiet {
        eprintln!(
            "{}: {} Hz, {} 声道, {} kbps{}",
            cli.input.display(),
            first.sample_rate,
            first.channels(),
            first.bitrate / 1000,
            if first.has_crc { ", CRC" } else { "" },
        );
    }

    // 4) 解码循环, PCM 以 f32le 写出
    let stdout;
    let mut writer: BufWriter<Box<dyn Write>> = match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("无法创建输出文件 '{}'", path.display()))?;
            BufWriter::new(Box::new(file))
        }
        None => {
            stdout = io::stdout();
            BufWriter::new(Box::new(stdout.lock()))
        }
    };

    let mut decoder = Mp3Decoder::new();
    let mut frames = 0u64;
    let mut samples = 0u64;
    loop {
        match decoder.decode_frame(&data, offset) {
            Ok(frame) => {
                for sample in &frame.pcm {
                    writer.write_all(&sample.to_le_bytes())?;
                }
                samples += frame.pcm.len() as u64 / frame.header.channels() as u64;
                frames += 1;
                offset += frame.header.frame_size;
            }
            // 输入耗尽, 正常结束
            Err(QinError::Eof) => break,
            Err(e) => {
                warn!("帧 {frames} 解码失败, 终止: {e}");
                return Err(e.into());
            }
        }
    }
    writer.flush()?;

    if !cli.quiet {
        let seconds = samples as f64 / f64::from(first.sample_rate);
        eprintln!("解码完成: {frames} 帧, 每声道 {samples} 采样 ({seconds:.2} 秒)");
    }
    Ok(())
}
