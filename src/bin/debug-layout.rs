/// Diagnostic tool to verify the scan → tree → pack pipeline
use filescape::layout::overlaps;
use filescape::scanner;
use filescape::tree;
use filescape::tree::pack::{pack_tree, PackConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("filescape=debug".parse()?),
        )
        .init();

    let scan_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("=== DIAGNOSTIC: Scan → Tree → Pack Pipeline ===");
    println!("Scanning: {}", scan_path.display());

    let (root, entries) = scanner::scan(&scan_path)?;
    println!("\n[1] Scan completed: {} entries", entries.len());

    let fs_tree = tree::build_tree(&root, &entries);
    println!("\n[2] Tree built: {} nodes", fs_tree.len());

    let root_node = fs_tree.get(fs_tree.root);
    println!(
        "    Root: '{}' (size={:.2} MB, children={})",
        root_node.name,
        root_node.size as f64 / 1_048_576.0,
        fs_tree.children(fs_tree.root).count()
    );

    let config = PackConfig::default();
    let layout = pack_tree(&fs_tree, &config)?;
    println!("\n[3] Layout packed: {} rectangles", layout.rects.len());

    println!("\n[4] Top 10 largest rectangles by area:");
    let mut sorted = layout.rects.clone();
    sorted.sort_by(|a, b| b.rect.area().partial_cmp(&a.rect.area()).unwrap());
    for (i, placed) in sorted.iter().take(10).enumerate() {
        let node = fs_tree.get(placed.node);
        println!(
            "    [{}] '{}' - {:.0}x{:.0} at ({:.0}, {:.0}) depth={} ({:?})",
            i,
            node.name,
            placed.rect.width,
            placed.rect.height,
            placed.rect.left(),
            placed.rect.top(),
            placed.depth,
            placed.kind
        );
    }

    // Separation audit: siblings at the root level must respect the margin
    println!("\n[5] Separation audit (root level, margin {}):", config.margin);
    let top: Vec<_> = layout.rects.iter().filter(|p| p.depth == 1).collect();
    let mut violations = 0usize;
    for i in 0..top.len() {
        for j in 0..i {
            if overlaps(&top[i].rect, &top[j].rect, config.margin) {
                violations += 1;
                let a = fs_tree.get(top[i].node);
                let b = fs_tree.get(top[j].node);
                println!("    VIOLATION: '{}' vs '{}'", a.name, b.name);
            }
        }
    }
    if violations == 0 {
        println!("    OK: {} top-level rects, no margin violations", top.len());
    }

    Ok(())
}
