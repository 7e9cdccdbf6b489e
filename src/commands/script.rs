use anyhow::Result;
use std::str::FromStr;

/// One line of a command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Depend {
        package: String,
        dependencies: Vec<String>,
    },
    Install(String),
    Remove(String),
    List,
    End,
    /// Unrecognized keyword, ignored when executed.
    Unknown(String),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let Some(keyword) = fields.next() else {
            anyhow::bail!("Empty command.");
        };
        let args: Vec<String> = fields.map(str::to_string).collect();

        match keyword {
            "DEPEND" => {
                let mut args = args.into_iter();
                match args.next() {
                    Some(package) => Ok(Command::Depend {
                        package,
                        dependencies: args.collect(),
                    }),
                    None => anyhow::bail!("DEPEND requires a package name."),
                }
            }
            "INSTALL" => Ok(Command::Install(single_name(keyword, args)?)),
            "REMOVE" => Ok(Command::Remove(single_name(keyword, args)?)),
            "LIST" => no_args(keyword, &args).map(|()| Command::List),
            "END" => no_args(keyword, &args).map(|()| Command::End),
            other => Ok(Command::Unknown(other.to_string())),
        }
    }
}

fn single_name(keyword: &str, args: Vec<String>) -> Result<String> {
    let [name]: [String; 1] = args.try_into().map_err(|args: Vec<String>| {
        anyhow::anyhow!(
            "{} requires exactly one package name, got {}.",
            keyword,
            args.len()
        )
    })?;
    Ok(name)
}

fn no_args(keyword: &str, args: &[String]) -> Result<()> {
    if !args.is_empty() {
        anyhow::bail!("{} takes no arguments.", keyword);
    }
    Ok(())
}
