use std::{
    borrow::Cow,
    env, fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use dictsplit_core::{aggregate::Aggregator, compare::unknown_words, engine::Engine};
use dictsplit_dict::WordList;
use log::{debug, info, warn};

use crate::options::{Mode, Options};

mod options;

fn main() -> Result<()> {
    if env::var("DICTSPLIT_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("DICTSPLIT_LOG")
            .write_style("DICTSPLIT_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // DICTSPLIT_FLAGS 里的选项排在命令行参数之前，命令行可以覆盖它们。
    let mut args: Vec<String> = env::var("DICTSPLIT_FLAGS")
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    for (i, arg) in env::args_os().enumerate().skip(1) {
        let arg = arg
            .into_string()
            .map_err(|arg| anyhow!("第 {i} 个参数不是合法的 Unicode: {arg:?}"))?;
        args.push(arg);
    }

    let options = Options::parse_from_args(&args).unwrap_or_else(|e| e.exit());
    debug!("dictsplit options: {:?}", options);

    let summary = run(&options)?;
    println!("{summary}");
    Ok(())
}

/// 一次运行的统计信息（打印给用户）。
#[derive(Debug, Clone, PartialEq, Eq)]
enum Summary {
    Split {
        lines: usize,
        unresolved: usize,
        known: usize,
        residual: usize,
    },
    Compare {
        lines: usize,
        unknown: usize,
    },
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Summary::Split {
                lines,
                unresolved,
                known,
                residual,
            } => write!(
                f,
                "处理完成：{lines} 行，其中 {unresolved} 行有残余；已知词 {known} 个，残余 {residual} 条"
            ),
            Summary::Compare { lines, unknown } => {
                write!(f, "处理完成：{lines} 行，其中 {unknown} 行不在词典中")
            }
        }
    }
}

/// 词典与输入都在切分开始前读完；任何一个读不了都直接失败。
fn run(options: &Options) -> Result<Summary> {
    let dict = load_dictionary(options)?;
    let lines = read_lines(&options.input)?;
    debug!("read {} lines from {}", lines.len(), options.input.display());

    match &options.mode {
        Mode::Split {
            known_out,
            remaining_out,
        } => {
            let engine = Engine::new(dict)
                .min_word_length(options.min_length)
                .parallel(options.parallel);
            let mut aggregator = Aggregator::new();
            engine.collect_into(&lines, &mut aggregator);
            let (line_count, unresolved) = (aggregator.lines(), aggregator.unresolved());
            let harvest = aggregator.finish();

            write_lines(known_out, &harvest.known)?;
            write_lines(remaining_out, &harvest.residual)?;
            info!(
                "known words -> {}, remaining text -> {}",
                known_out.display(),
                remaining_out.display()
            );
            Ok(Summary::Split {
                lines: line_count,
                unresolved,
                known: harvest.known.len(),
                residual: harvest.residual.len(),
            })
        }
        Mode::Compare { out } => {
            let unknown = unknown_words(lines.iter().map(String::as_str), &dict);
            write_lines(out, &unknown)?;
            info!("non-dictionary lines -> {}", out.display());
            Ok(Summary::Compare {
                lines: lines.len(),
                unknown: unknown.len(),
            })
        }
    }
}

fn load_dictionary(options: &Options) -> Result<WordList> {
    let dict = match &options.dict {
        Some(path) => WordList::from_path(path)?,
        None => WordList::builtin(),
    };
    if dict.is_empty() {
        warn!("dictionary is empty; every non-empty line will be residual");
    }
    Ok(dict)
}

/// 读取输入，只去掉行尾换行符（`\n` / `\r\n`），首尾空白由 engine 处理。
///
/// 非法 UTF-8 字节替换为 U+FFFD，不中断整次运行。
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("无法读取输入 {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("{} contains invalid UTF-8; replaced with U+FFFD", path.display());
    }
    Ok(text.lines().map(str::to_owned).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("无法创建输出 {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
        .with_context(|| format!("写入 {} 失败", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn file(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn split_options(&self, input: PathBuf, dict: Option<PathBuf>, min_length: usize) -> Options {
            Options {
                input,
                dict,
                min_length,
                parallel: false,
                mode: Mode::Split {
                    known_out: self.path("known.txt"),
                    remaining_out: self.path("remaining.txt"),
                },
            }
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.path(name)).unwrap()
        }
    }

    #[test]
    fn split_writes_sorted_unique_streams() {
        let fx = Fixture::new();
        let dict = fx.file("dict.txt", "cat\ndog\nTest\ntesting\n\n");
        let input = fx.file("input.txt", "catdog\ncatx\n  testing  \n\ndogcat\ncatx\nCatCat\n");
        let summary = run(&fx.split_options(input, Some(dict), 3)).unwrap();

        assert_eq!(fx.read("known.txt"), "Cat\ncat\ndog\ntesting\n");
        assert_eq!(fx.read("remaining.txt"), "catx\n");
        assert_eq!(
            summary,
            Summary::Split {
                lines: 7,
                unresolved: 2,
                known: 4,
                residual: 1,
            }
        );
    }

    #[test]
    fn failed_lines_keep_their_whitespace() {
        let fx = Fixture::new();
        let dict = fx.file("dict.txt", "cat\ndog\n");
        let input = fx.file("input.txt", "  catx  \r\n\tdogcat \n");
        run(&fx.split_options(input, Some(dict), 3)).unwrap();

        assert_eq!(fx.read("known.txt"), "cat\ndog\n");
        assert_eq!(fx.read("remaining.txt"), "  catx  \n");
    }

    #[test]
    fn invalid_utf8_input_is_replaced_not_fatal() {
        let fx = Fixture::new();
        let dict = fx.file("dict.txt", "cat\n");
        let input = fx.path("input.txt");
        fs::write(&input, b"cat\nc\xffat\ncatcat\n").unwrap();
        let summary = run(&fx.split_options(input, Some(dict), 3)).unwrap();

        assert_eq!(fx.read("known.txt"), "cat\n");
        assert_eq!(fx.read("remaining.txt"), "c\u{fffd}at\n");
        assert_eq!(
            summary,
            Summary::Split {
                lines: 3,
                unresolved: 1,
                known: 1,
                residual: 1,
            }
        );
    }

    #[test]
    fn split_with_builtin_dictionary() {
        let fx = Fixture::new();
        let input = fx.file("input.txt", "Summer2024\nsummerlove\ndragonmonkey\n");
        let mut options = fx.split_options(input, None, 4);
        options.parallel = true;
        run(&options).unwrap();

        assert_eq!(fx.read("known.txt"), "dragon\nlove\nmonkey\nsummer\n");
        assert_eq!(fx.read("remaining.txt"), "Summer2024\n");
    }

    #[test]
    fn missing_input_fails_before_writing() {
        let fx = Fixture::new();
        let dict = fx.file("dict.txt", "cat\n");
        let err = run(&fx.split_options(fx.path("missing.txt"), Some(dict), 3)).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
        assert!(!fx.path("known.txt").exists());
        assert!(!fx.path("remaining.txt").exists());
    }

    #[test]
    fn missing_dictionary_fails() {
        let fx = Fixture::new();
        let input = fx.file("input.txt", "cat\n");
        let result = run(&fx.split_options(input, Some(fx.path("nodict.txt")), 3));
        assert!(result.is_err());
        assert!(!fx.path("known.txt").exists());
    }

    #[test]
    fn compare_lists_unknown_lines() {
        let fx = Fixture::new();
        let dict = fx.file("dict.txt", "apple\npear\n");
        let input = fx.file("input.txt", "Apple\nqwerty\n\npear\nasdf\n");
        let options = Options {
            input,
            dict: Some(dict),
            min_length: 4,
            parallel: false,
            mode: Mode::Compare {
                out: fx.path("unknown.txt"),
            },
        };
        let summary = run(&options).unwrap();
        assert_eq!(fx.read("unknown.txt"), "qwerty\n\nasdf\n");
        assert_eq!(summary, Summary::Compare { lines: 5, unknown: 3 });
    }
}
