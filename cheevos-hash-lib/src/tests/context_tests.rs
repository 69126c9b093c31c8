use super::*;
use std::path::PathBuf;

fn labels(ctx: &HashContext, path: &str) -> Vec<&'static str> {
    ctx.recipes_for_path(&PathBuf::from(path))
        .iter()
        .map(|h| h.label())
        .collect()
}

#[test]
fn test_extension_candidates() {
    assert_eq!(extension_candidates(Path::new("game.sfc")), vec!["sfc"]);
    assert_eq!(
        extension_candidates(Path::new("dir.v2/game.tar.smc")),
        vec!["smc"]
    );
    assert_eq!(
        extension_candidates(Path::new("game.smc|md")),
        vec!["smc", "md"]
    );
    assert!(extension_candidates(Path::new("roms/README")).is_empty());
    assert!(extension_candidates(Path::new("dir.v2/README")).is_empty());
}

#[test]
fn test_trailing_dot_gives_empty_extension() {
    assert_eq!(extension_candidates(Path::new("game.")), vec![""]);
    let ctx = HashContext::with_default_recipes();
    assert_eq!(labels(&ctx, "game."), vec!["NES", "plain MD5"]);
}

#[test]
fn test_default_recipes_registered_in_output_order() {
    let ctx = HashContext::with_default_recipes();
    let all: Vec<_> = ctx.hashers().map(|h| h.label()).collect();
    assert_eq!(all, vec!["SNES", "Genesis", "NES", "plain MD5"]);
}

#[test]
fn test_dispatch_by_extension() {
    let ctx = HashContext::with_default_recipes();
    assert_eq!(labels(&ctx, "mario.sfc"), vec!["SNES", "NES", "plain MD5"]);
    assert_eq!(labels(&ctx, "sonic.md"), vec!["Genesis", "NES", "plain MD5"]);
    assert_eq!(labels(&ctx, "sonic.bin"), vec!["Genesis", "NES", "plain MD5"]);
    assert_eq!(labels(&ctx, "zelda.nes"), vec!["NES", "plain MD5"]);
    assert_eq!(labels(&ctx, "noext"), vec!["NES", "plain MD5"]);
}

#[test]
fn test_dispatch_is_case_sensitive() {
    let ctx = HashContext::with_default_recipes();
    assert_eq!(labels(&ctx, "mario.SFC"), vec!["NES", "plain MD5"]);
    assert_eq!(labels(&ctx, "sonic.Gen"), vec!["NES", "plain MD5"]);
}

#[test]
fn test_dispatch_with_extension_list() {
    let ctx = HashContext::with_default_recipes();
    assert_eq!(
        labels(&ctx, "dump.md|smc"),
        vec!["SNES", "Genesis", "NES", "plain MD5"]
    );
}

#[test]
fn test_options_carried() {
    let ctx = HashContext::new().with_options(HashOptions::new().strict_io(true));
    assert!(ctx.options().strict_io);
    assert!(!HashContext::default().options().strict_io);
}

#[test]
fn test_missing_file_yields_no_results() {
    let ctx = HashContext::with_default_recipes();
    let results = ctx
        .hash_file(Path::new("/nonexistent/cheevos-hash/game.sfc"))
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_recipe_hash_display_and_json() {
    let entry = RecipeHash {
        label: "SNES",
        platform: Some(Platform::Snes),
        digest: cheevos_hash_core::Md5::digest(b"abc"),
    };
    assert_eq!(entry.to_string(), "SNES: 900150983cd24fb0d6963f7d28e17f72");

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["console"], "SNES");
    assert_eq!(json["platform"], "snes");
    assert_eq!(json["md5"], "900150983cd24fb0d6963f7d28e17f72");

    let plain = RecipeHash {
        label: "plain MD5",
        platform: None,
        digest: cheevos_hash_core::Md5::digest(b""),
    };
    let json = serde_json::to_value(&plain).unwrap();
    assert!(json.get("platform").is_none());
    assert_eq!(json["md5"], "d41d8cd98f00b204e9800998ecf8427e");
}
