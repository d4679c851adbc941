use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use ut_sdk::{DocumentHistories, HistoryConfig, HistoryNode, VersionTree};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => HistoryConfig::load(path)?,
        None => HistoryConfig::default(),
    };
    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Replay(args) => cmd_replay(args, config, cli.format),
        Command::Diff(args) => cmd_diff(args, &config, cli.format),
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn cmd_replay(args: ReplayArgs, config: HistoryConfig, format: OutputFormat) -> anyhow::Result<()> {
    let tree = replay(&args, config)?;
    let nodes = tree.nodes();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        OutputFormat::Text => {
            for node in &nodes {
                println!("{}", describe(&tree, node));
            }
            println!(
                "\n{} {} nodes, head {}",
                "✓".green().bold(),
                nodes.len(),
                tree.head().short_hex().yellow()
            );
        }
    }
    Ok(())
}

/// Commit every file into one tree, then undo `args.undo` times.
pub(crate) fn replay(args: &ReplayArgs, config: HistoryConfig) -> anyhow::Result<VersionTree> {
    let mut docs = DocumentHistories::new(config);
    let (first, rest) = args
        .files
        .split_first()
        .context("no files to replay")?;

    let uri = first.display().to_string();
    docs.track(&uri, &read(first)?)?;
    for path in rest {
        let content = read(path)?;
        let id = docs.get_mut(&uri)?.commit(&content, None)?;
        debug!(file = %path.display(), node = %id.short_hex(), "replayed");
    }
    for _ in 0..args.undo {
        if docs.get_mut(&uri)?.undo().is_none() {
            break;
        }
    }

    docs.untrack(&uri).context("replayed document vanished")
}

fn describe(tree: &VersionTree, node: &HistoryNode) -> String {
    let mut markers = Vec::new();
    if node.id == tree.head() {
        markers.push("HEAD".yellow().bold().to_string());
    }
    if node.id == tree.root_id() {
        markers.push("root".dimmed().to_string());
    }
    if Some(node.id) == tree.initial_snapshot() {
        markers.push("initial".cyan().to_string());
    }
    if node.is_branch_point() {
        markers.push("fork".magenta().to_string());
    }

    let line = format!("{} {}", "●".bold(), node.summary());
    if markers.is_empty() {
        line
    } else {
        format!("{line} [{}]", markers.join(", "))
    }
}

fn cmd_diff(args: DiffArgs, config: &HistoryConfig, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render_diff(&args, config, format)?);
    Ok(())
}

/// Diff two files and render the edit script.
pub(crate) fn render_diff(
    args: &DiffArgs,
    config: &HistoryConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let before = read(&args.before)?;
    let after = read(&args.after)?;
    let script = ut_diff::diff_with_config(&before, &after, &config.tree.diff);

    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&ut_diff::serialize(&script)?);
            out.push('\n');
        }
        OutputFormat::Text => {
            for op in &script {
                let line = match op {
                    ut_diff::EditOp::Keep { pos, len } => {
                        format!("  {} {pos}+{len}", "keep".dimmed())
                    }
                    ut_diff::EditOp::Remove { pos, len } => {
                        format!("  {} {pos}+{len}", "remove".red())
                    }
                    ut_diff::EditOp::Add { pos, content } => {
                        format!("  {} @{pos} {content:?}", "add".green())
                    }
                };
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(&format!(
                "{} kept, {} removed, {} inserted\n",
                script.kept_chars(),
                script.removed_chars().to_string().red(),
                script.inserted_chars().to_string().green()
            ));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn replay_builds_linear_history() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write(dir.path(), "0.txt", "ABC"),
            write(dir.path(), "1.txt", "ABX"),
            write(dir.path(), "2.txt", "ABXY"),
        ];
        let tree = replay(&ReplayArgs { files, undo: 0 }, HistoryConfig::default()).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.content(None).unwrap(), "ABXY");
    }

    #[test]
    fn replay_then_undo_stops_at_initial_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write(dir.path(), "0.txt", "one"),
            write(dir.path(), "1.txt", "one two"),
        ];
        let tree = replay(&ReplayArgs { files, undo: 10 }, HistoryConfig::default()).unwrap();
        assert_eq!(tree.content(None).unwrap(), "one");
        assert_eq!(Some(tree.head()), tree.initial_snapshot());
    }

    #[test]
    fn replay_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![dir.path().join("absent.txt")];
        assert!(replay(&ReplayArgs { files, undo: 0 }, HistoryConfig::default()).is_err());
    }

    #[test]
    fn diff_json_output_replays_to_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            before: write(dir.path(), "before.txt", "fn main() {}\n"),
            after: write(dir.path(), "after.txt", "fn main() {\n    run();\n}\n"),
        };
        let rendered = render_diff(&args, &HistoryConfig::default(), OutputFormat::Json).unwrap();

        let script = ut_diff::deserialize(rendered.trim_end()).unwrap();
        let replayed = ut_diff::apply("fn main() {}\n", &script).unwrap();
        assert_eq!(replayed, fs::read_to_string(&args.after).unwrap());
    }

    #[test]
    fn diff_text_output_summarises_counts() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            before: write(dir.path(), "a.txt", "abc"),
            after: write(dir.path(), "b.txt", "abXc"),
        };
        let rendered = render_diff(&args, &HistoryConfig::default(), OutputFormat::Text).unwrap();
        assert!(rendered.contains("add @2 \"X\""));
        assert!(rendered.ends_with("3 kept, 0 removed, 1 inserted\n"));
    }

    #[test]
    fn diff_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = DiffArgs {
            before: dir.path().join("absent.txt"),
            after: write(dir.path(), "b.txt", "x"),
        };
        assert!(render_diff(&args, &HistoryConfig::default(), OutputFormat::Json).is_err());
    }

    #[test]
    fn describe_marks_head_and_initial() {
        let tree = VersionTree::new("seed").unwrap();
        colored::control::set_override(false);
        let head = tree.node(&tree.head()).unwrap().clone();
        let line = describe(&tree, &head);
        assert!(line.contains("HEAD"));
        assert!(line.contains("initial"));
    }
}
