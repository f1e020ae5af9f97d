use std::{
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use libseo::{
    DEFAULT_MAX_LENGTH, SiteConfig, batch::summarize_dir, config::site_config, extract_excerpt,
    header::Header,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SITE_CONFIG_FILE: &str = "site.toml";

const USAGE: &str = "usage:
  seo excerpt <file> [max_length]
  seo scan <dir> [--config <site.toml>]
  seo head <file> <page_url> [--config <site.toml>]
--config applies to scan and head only.";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse_args(env::args().skip(1).collect())? {
        Command::Excerpt { file, max_length } => excerpt(&file, max_length),
        Command::Scan { dir, config } => {
            let site = load_site(config.as_deref())?;
            let summaries = summarize_dir(&dir, &site, DEFAULT_MAX_LENGTH)?;
            info!(count = summaries.len(), "done");
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok(())
        }
        Command::Head {
            file,
            page_url,
            config,
        } => {
            let site = load_site(config.as_deref())?;
            let content = read_to_string(&file)
                .with_note(|| format!("While reading {}", file.display()))?;
            let header = Header::try_from(content.as_str())?;
            println!("{}", header.seo_head(&content, &page_url, &site)?);
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Excerpt {
        file: PathBuf,
        max_length: usize,
    },
    Scan {
        dir: PathBuf,
        config: Option<PathBuf>,
    },
    Head {
        file: PathBuf,
        page_url: String,
        config: Option<PathBuf>,
    },
}

fn parse_args(mut args: Vec<String>) -> color_eyre::Result<Command> {
    let config = take_flag(&mut args, "--config")?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["excerpt", ..] if config.is_some() => {
            Err(eyre!("--config does not apply to excerpt")).with_note(|| USAGE)
        }
        ["excerpt", file] => Ok(Command::Excerpt {
            file: PathBuf::from(file),
            max_length: DEFAULT_MAX_LENGTH,
        }),
        ["excerpt", file, max] => {
            let max_length = max
                .parse::<usize>()
                .with_note(|| format!("max_length must be a non-negative integer, got {max:?}"))?;
            Ok(Command::Excerpt {
                file: PathBuf::from(file),
                max_length,
            })
        }
        ["scan", dir] => Ok(Command::Scan {
            dir: PathBuf::from(dir),
            config,
        }),
        ["head", file, page_url] => Ok(Command::Head {
            file: PathBuf::from(file),
            page_url: (*page_url).to_owned(),
            config,
        }),
        _ => Err(eyre!("unrecognised arguments {args:?}")).with_note(|| USAGE),
    }
}

fn excerpt(file: &Path, max_length: usize) -> color_eyre::Result<()> {
    let content =
        read_to_string(file).with_note(|| format!("While reading {}", file.display()))?;
    println!("{}", extract_excerpt(&content, max_length));
    Ok(())
}

/// Explicit `--config` wins; otherwise `site.toml` in the working directory,
/// otherwise the compiled-in defaults.
fn load_site(explicit: Option<&Path>) -> color_eyre::Result<SiteConfig> {
    if let Some(path) = explicit {
        return SiteConfig::load(path);
    }

    let implicit = env::current_dir()
        .with_note(|| "While getting the current working directory")?
        .join(SITE_CONFIG_FILE);
    if implicit.exists() {
        debug!(path = %implicit.display(), "loading site configuration");
        SiteConfig::load(&implicit)
    } else {
        Ok(site_config())
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> color_eyre::Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        return Err(eyre!("{flag} needs a value")).with_note(|| USAGE);
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(value)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Command, DEFAULT_MAX_LENGTH, parse_args, take_flag};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_is_taken_with_its_value() {
        let mut a = args(&["scan", "--config", "site.toml", "posts"]);
        let flag = take_flag(&mut a, "--config").unwrap();
        assert_eq!(flag, Some(PathBuf::from("site.toml")));
        assert_eq!(a, args(&["scan", "posts"]));
    }

    #[test]
    fn absent_flag_leaves_args_alone() {
        let mut a = args(&["scan", "posts"]);
        assert_eq!(take_flag(&mut a, "--config").unwrap(), None);
        assert_eq!(a, args(&["scan", "posts"]));
    }

    #[test]
    fn flag_without_value_is_an_error() {
        let mut a = args(&["scan", "posts", "--config"]);
        assert!(take_flag(&mut a, "--config").is_err());
    }

    #[test]
    fn excerpt_defaults_max_length() {
        assert_eq!(
            parse_args(args(&["excerpt", "post.md"])).unwrap(),
            Command::Excerpt {
                file: PathBuf::from("post.md"),
                max_length: DEFAULT_MAX_LENGTH,
            }
        );
        assert_eq!(
            parse_args(args(&["excerpt", "post.md", "40"])).unwrap(),
            Command::Excerpt {
                file: PathBuf::from("post.md"),
                max_length: 40,
            }
        );
    }

    #[test]
    fn excerpt_rejects_bad_max_length() {
        assert!(parse_args(args(&["excerpt", "post.md", "-3"])).is_err());
        assert!(parse_args(args(&["excerpt", "post.md", "ten"])).is_err());
    }

    #[test]
    fn excerpt_rejects_config() {
        let err = parse_args(args(&["excerpt", "post.md", "--config", "site.toml"])).unwrap_err();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn scan_and_head_accept_config_anywhere() {
        assert_eq!(
            parse_args(args(&["--config", "site.toml", "scan", "posts"])).unwrap(),
            Command::Scan {
                dir: PathBuf::from("posts"),
                config: Some(PathBuf::from("site.toml")),
            }
        );
        assert_eq!(
            parse_args(args(&["head", "post.md", "https://x.com/p", "--config", "s.toml"]))
                .unwrap(),
            Command::Head {
                file: PathBuf::from("post.md"),
                page_url: "https://x.com/p".into(),
                config: Some(PathBuf::from("s.toml")),
            }
        );
        assert_eq!(
            parse_args(args(&["scan", "posts"])).unwrap(),
            Command::Scan {
                dir: PathBuf::from("posts"),
                config: None,
            }
        );
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["build", "posts"])).is_err());
        assert!(parse_args(args(&["scan"])).is_err());
        assert!(parse_args(args(&["head", "post.md"])).is_err());
    }
}
