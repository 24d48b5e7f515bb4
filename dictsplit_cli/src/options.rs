//! 命令行选项。
//! `split <INPUT>` 切分为已知词/残余两个文件，`compare <INPUT>` 列出不在词典中的行。
//! `--dict`、`--min-length`、`--parallel` 是全局选项，也可以通过 `DICTSPLIT_FLAGS` 预置。

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use dictsplit_core::segmenter::DEFAULT_MIN_WORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Split {
        known_out: PathBuf,
        remaining_out: PathBuf,
    },
    Compare {
        out: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    /// 用户词表；None 表示使用内置语料
    pub dict: Option<PathBuf>,
    pub min_length: usize,
    pub parallel: bool,
    pub mode: Mode,
}

fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .help("输入文件，每行一个字符串")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn make_options_parser() -> Command {
    Command::new("dictsplit")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("把字符串贪心切分为已知词与残余")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("dict")
                .short('d')
                .long("dict")
                .value_name("FILE")
                .help("自定义词表（每行一个词）；缺省使用内置英文词表")
                .global(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("min-length")
                .short('m')
                .long("min-length")
                .value_name("N")
                .help("已知词的最短长度（字符数）")
                .global(true)
                .default_value("4")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .help("按行并行切分")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("split")
                .about("切分输入，输出已知词与残余")
                .arg(input_arg())
                .arg(
                    Arg::new("known-out")
                        .long("known-out")
                        .value_name("FILE")
                        .default_value("known_words.txt")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("remaining-out")
                        .long("remaining-out")
                        .value_name("FILE")
                        .default_value("remaining_text.txt")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("列出不在词典中的行")
                .arg(input_arg())
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .value_name("FILE")
                        .default_value("non_english_words.txt")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

impl Options {
    pub fn parse_from_args(flags: &[String]) -> Result<Self, clap::Error> {
        let matches = make_options_parser().try_get_matches_from(flags.iter())?;
        let (name, sub) = matches.subcommand().ok_or_else(|| {
            make_options_parser().error(ErrorKind::MissingSubcommand, "缺少子命令")
        })?;

        let mode = match name {
            "split" => Mode::Split {
                known_out: path(sub, "known-out"),
                remaining_out: path(sub, "remaining-out"),
            },
            "compare" => Mode::Compare {
                out: path(sub, "out"),
            },
            other => {
                return Err(make_options_parser().error(
                    ErrorKind::InvalidSubcommand,
                    format!("未知子命令 {other}"),
                ));
            }
        };

        Ok(Options {
            input: path(sub, "input"),
            dict: sub.get_one::<PathBuf>("dict").cloned(),
            min_length: sub
                .get_one::<usize>("min-length")
                .copied()
                .unwrap_or(DEFAULT_MIN_WORD_LENGTH),
            parallel: sub.get_flag("parallel"),
            mode,
        })
    }
}

/// 必填或带默认值的路径参数，clap 保证一定存在。
fn path(matches: &ArgMatches, id: &str) -> PathBuf {
    matches.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn split_defaults() {
        let options = Options::parse_from_args(&args("split words.txt")).unwrap();
        assert_eq!(
            options,
            Options {
                input: PathBuf::from("words.txt"),
                dict: None,
                min_length: 4,
                parallel: false,
                mode: Mode::Split {
                    known_out: PathBuf::from("known_words.txt"),
                    remaining_out: PathBuf::from("remaining_text.txt"),
                },
            }
        );
    }

    #[test]
    fn global_flags_before_subcommand() {
        let options =
            Options::parse_from_args(&args("--dict my.dic -m 3 -j split in.txt --known-out k.txt"))
                .unwrap();
        assert_eq!(options.dict, Some(PathBuf::from("my.dic")));
        assert_eq!(options.min_length, 3);
        assert!(options.parallel);
        assert_eq!(
            options.mode,
            Mode::Split {
                known_out: PathBuf::from("k.txt"),
                remaining_out: PathBuf::from("remaining_text.txt"),
            }
        );
    }

    #[test]
    fn compare_with_flags_after_subcommand() {
        let options =
            Options::parse_from_args(&args("compare in.txt --dict d.txt -o out.txt")).unwrap();
        assert_eq!(options.dict, Some(PathBuf::from("d.txt")));
        assert_eq!(
            options.mode,
            Mode::Compare {
                out: PathBuf::from("out.txt")
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Options::parse_from_args(&args("split")).is_err());
        assert!(Options::parse_from_args(&args("split in.txt --min-length 0")).is_err());
        assert!(Options::parse_from_args(&args("split in.txt --min-length four")).is_err());
        assert!(Options::parse_from_args(&args("explode in.txt")).is_err());
        assert!(Options::parse_from_args(&args("")).is_err());
    }
}
