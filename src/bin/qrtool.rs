use clap::{Parser, Subcommand};
use qrweave::config::{default_border, default_scale};
use qrweave::encoder::format::FormatInfo;
use qrweave::encoder::version::VersionInfo;
use qrweave::tools::{load_luma, module_stats, sample_modules, save_png, to_ascii};
use qrweave::{ECLevel, EncodeOptions, MaskPattern, Version, encode_with_options};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "qrweave CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a QR code (PNG with --out, ASCII otherwise)
    Encode {
        text: String,
        /// Error correction level (L, M, Q, H); QR_EC_LEVEL when omitted
        #[arg(long)]
        ec: Option<ECLevel>,
        /// Force a mask pattern (0-7); QR_MASK when omitted
        #[arg(long)]
        mask: Option<u8>,
        #[arg(long)]
        min_version: Option<u8>,
        /// Raise the EC level while the symbol size stays the same
        #[arg(long)]
        boost_ec: bool,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        scale: Option<usize>,
        #[arg(long)]
        border: Option<usize>,
    },
    /// Read format and version information back from a PNG written by `encode`
    Inspect {
        image: PathBuf,
        #[arg(long)]
        scale: Option<usize>,
        #[arg(long)]
        border: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            ec,
            mask,
            min_version,
            boost_ec,
            out,
            scale,
            border,
        } => build_options(ec, mask, min_version, boost_ec).and_then(|options| {
            encode_cmd(
                &text,
                &options,
                out.as_deref(),
                scale.unwrap_or_else(default_scale),
                border.unwrap_or_else(default_border),
            )
        }),
        Command::Inspect {
            image,
            scale,
            border,
        } => inspect_cmd(
            &image,
            scale.unwrap_or_else(default_scale),
            border.unwrap_or_else(default_border),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn build_options(
    ec: Option<ECLevel>,
    mask: Option<u8>,
    min_version: Option<u8>,
    boost_ec: bool,
) -> Result<EncodeOptions, String> {
    let mut options = EncodeOptions::from_env().with_boost_ec(boost_ec);
    if let Some(ec) = ec {
        options = options.with_ec_level(ec);
    }
    if let Some(m) = mask {
        options = options.with_mask(MaskPattern::from_bits(m).map_err(|e| e.to_string())?);
    }
    if let Some(v) = min_version {
        options = options.with_min_version(Version::new(v).map_err(|e| e.to_string())?);
    }
    Ok(options)
}

fn encode_cmd(
    text: &str,
    options: &EncodeOptions,
    out: Option<&Path>,
    scale: usize,
    border: usize,
) -> Result<(), String> {
    let start = Instant::now();
    let qr = encode_with_options(text, options).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    eprintln!(
        "version={} size={}x{} ec={:?} mask={} mode={:?} ({:.2?})",
        qr.version(),
        qr.width(),
        qr.height(),
        qr.ec_level(),
        qr.mask().index(),
        qr.mode(),
        elapsed
    );

    match out {
        Some(path) => {
            save_png(&qr, path, scale, border)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", to_ascii(&qr, border)),
    }
    Ok(())
}

fn inspect_cmd(image: &Path, scale: usize, border: usize) -> Result<(), String> {
    let img = load_luma(image).map_err(|e| format!("Failed to load image {}: {}", image.display(), e))?;
    let (width, height) = img.dimensions();
    println!("Image: {} ({}x{})", image.display(), width, height);

    let modules = sample_modules(&img, scale, border).ok_or_else(|| {
        format!(
            "Image size does not match scale={} border={}",
            scale, border
        )
    })?;
    let size = modules.width();
    println!("Modules: {}x{} (version {} by size)", size, size, (size - 17) / 4);

    let stats = module_stats(&modules);
    println!(
        "Dark modules: {}/{} ({:.1}%)",
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0
    );

    match FormatInfo::read(&modules) {
        Some(info) => println!(
            "Format: ec={:?} mask={}",
            info.ec_level,
            info.mask_pattern.index()
        ),
        None => println!("Format: unreadable"),
    }
    match VersionInfo::read(&modules) {
        Some(v) => println!("Version info: {}", v),
        None if size >= 45 => println!("Version info: unreadable"),
        None => println!("Version info: none (below version 7)"),
    }
    Ok(())
}
