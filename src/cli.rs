use clap::{Parser, Subcommand, ValueEnum};

use enconv::Locale;

#[derive(Parser)]
#[command(name = "enconv")]
#[command(about = "Detect text file encodings and convert to UTF-8")]
#[command(version = env!("ENCONV_BUILD_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Detect the encoding of input bytes")]
    Detect {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, value_enum, ignore_case = true, default_value = "en")]
        locale: LocaleArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List candidate encodings for a locale")]
    Candidates {
        #[arg(long, value_enum, ignore_case = true, default_value = "en")]
        locale: LocaleArg,

        #[arg(long, help = "Seed the list with an already-detected encoding name")]
        detected: Option<String>,

        #[arg(long, short = 'i', help = "Detect from input instead of --detected")]
        r#in: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Convert input to UTF-8")]
    Convert {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, short = 'e', help = "Decode with this encoding instead of the detected one")]
        encoding: Option<String>,

        #[arg(long, value_enum, ignore_case = true, default_value = "en")]
        locale: LocaleArg,

        #[arg(long, help = "Emit a text/plain data: URI with base64 payload")]
        data_uri: bool,

        #[arg(long, help = "Write control characters to a terminal without escaping")]
        force: bool,
    },

    #[command(about = "Show the first lines of the converted text")]
    Preview {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'e', help = "Decode with this encoding instead of the detected one")]
        encoding: Option<String>,

        #[arg(long, value_enum, ignore_case = true, default_value = "en")]
        locale: LocaleArg,

        #[arg(long, short = 'n', default_value = "5", help = "Number of lines to show")]
        lines: usize,
    },

    #[command(about = "Show codec registry details for an encoding name")]
    Info {
        name: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    #[value(name = "zh-tw", alias = "zh_TW")]
    ZhTw,
    #[value(name = "zh-cn", alias = "zh_CN")]
    ZhCn,
    Ja,
    Ko,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::ZhTw => Locale::ZhTw,
            LocaleArg::ZhCn => Locale::ZhCn,
            LocaleArg::Ja => Locale::Ja,
            LocaleArg::Ko => Locale::Ko,
            LocaleArg::En => Locale::En,
        }
    }
}
