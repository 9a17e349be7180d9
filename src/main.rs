use std::path::PathBuf;

use filescape::layout::NodeKind;
use filescape::scanner;
use filescape::tree;
use filescape::tree::pack::{pack_tree, PackConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("filescape=info".parse()?),
        )
        .init();

    let scan_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let (root, entries) = scanner::scan(&scan_path)?;
    let fs_tree = tree::build_tree(&root, &entries);

    let config = PackConfig::default();
    let layout = pack_tree(&fs_tree, &config)?;

    let root_rect = layout.rects[0].rect;
    println!(
        "{}: {} nodes packed into {:.0} x {:.0}",
        root.display(),
        layout.rects.len(),
        root_rect.width,
        root_rect.height
    );

    // Largest folders first — the picture the treemap would foreground
    let mut placed: Vec<_> = layout
        .rects
        .iter()
        .filter(|p| p.kind == NodeKind::Folder && p.depth == 1)
        .collect();
    placed.sort_by(|a, b| {
        let sa = fs_tree.get(a.node).size;
        let sb = fs_tree.get(b.node).size;
        sb.cmp(&sa)
    });

    println!("\nTop-level folders:");
    for p in placed.iter().take(15) {
        let node = fs_tree.get(p.node);
        println!(
            "  {:<32} {:>10.2} MB  {:.0}x{:.0} at ({:.0}, {:.0})",
            node.name,
            node.size as f64 / 1_048_576.0,
            p.rect.width,
            p.rect.height,
            p.rect.left(),
            p.rect.top()
        );
    }

    let content_area: f64 = layout
        .rects
        .iter()
        .filter(|p| p.kind == NodeKind::File)
        .map(|p| p.rect.area())
        .sum();
    println!(
        "\nPacking efficiency: {:.1}% of the root bounds is file area",
        100.0 * content_area / root_rect.area()
    );

    Ok(())
}
