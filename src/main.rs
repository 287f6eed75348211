//! bulk-edit-preview <edits.json> [options.json]
//!
//! 读取 JSON 编辑列表，从磁盘加载预览内容，打印分组后的预览树。

use std::io::{self, Write};
use std::{env, path::Path};

use bulk_edit_tree::{BulkEditTree, Edit, RowKind, TreeOptions};

mod logging;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(edits_path) = args.get(1) else {
        eprintln!("usage: bulk-edit-preview <edits.json> [options.json]");
        std::process::exit(2);
    };

    let _logging = logging::init();

    let options = match args.get(2) {
        Some(path) => TreeOptions::load(Path::new(path)).map_err(io::Error::other)?,
        None => TreeOptions::default(),
    };

    let data = std::fs::read_to_string(edits_path)?;
    let edits: Vec<Edit> = serde_json::from_str(&data).map_err(io::Error::other)?;
    tracing::info!(path = %edits_path, edits = edits.len(), "edits loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let mut tree = BulkEditTree::with_options(options);
    runtime.block_on(tree.init_tree_from_disk(&edits));

    let mut stdout = io::stdout().lock();
    for row in tree.flatten_for_view() {
        let indent = "  ".repeat(row.depth as usize);
        let marker = match row.kind {
            RowKind::Group if row.is_expanded => "▼ ",
            RowKind::Group => "▶ ",
            RowKind::Edit => "  ",
        };
        writeln!(stdout, "{}{}{}", indent, marker, row.label)?;
    }
    Ok(())
}
