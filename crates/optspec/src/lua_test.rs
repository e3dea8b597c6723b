// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use chrono::TimeZone;
use rstest::rstest;

use super::*;

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

#[rstest]
fn test_render_full_module() {
    let module = LuaModule::from_yaml(
        r#"
description: Compiler toolchain
help: Loads the compiler toolchain.
conflicts:
  - gcc
family:
  - compiler
setenv:
  - CC: icc
  - FC: ifort
prepend_path:
  PATH:
    - /opt/intel/bin
    - /opt/intel/sbin
load:
  - cmake
  - python: "3.11"
"#,
    )
    .expect("Should parse module");

    let expected = r#"-- -*- lua -*-
-- Author: tester
-- Created: 2024-01-02 03:04:05

--
-- Compiler toolchain
--

local pkgName = myModuleName()
local pkgVersion = myModuleVersion()
local pkgNameVer = myModuleFullName()

whatis("Name: " .. pkgName)
whatis("Version: " .. pkgVersion)
whatis("Description: Compiler toolchain")

help([[
Loads the compiler toolchain.
]])

-- Conflict(s).
conflict("gcc")

-- Family.
family("compiler")

-- Environment variables.
setenv("CC", "icc")
setenv("FC", "ifort")

-- Prepend paths.
prepend_path("PATH", "/opt/intel/bin", "/opt/intel/sbin")

-- Load packages and versions.
load("cmake")
load(pathJoin("python", "3.11"))

"#;
    assert_eq!(module.render("tester", created()), expected);
}

#[rstest]
fn test_render_empty_module_has_only_header() {
    let rendered = LuaModule::default().render("tester", created());
    assert_eq!(
        rendered,
        "-- -*- lua -*-\n-- Author: tester\n-- Created: 2024-01-02 03:04:05\n\n"
    );
}

#[rstest]
fn test_render_escapes_quotes() {
    let module = LuaModule {
        setenv: vec![IndexMap::from([(
            "GREETING".to_string(),
            Value::String("say \"hi\"".to_string()),
        )])],
        ..Default::default()
    };
    let rendered = module.render("tester", created());
    assert!(rendered.contains(r#"setenv("GREETING", "say \"hi\"")"#), "{rendered}");
}

#[rstest]
fn test_numeric_setenv_values() {
    let module = LuaModule::from_yaml("setenv:\n  - OMP_NUM_THREADS: 4\n").unwrap();
    let rendered = module.render("tester", created());
    assert!(rendered.contains(r#"setenv("OMP_NUM_THREADS", "4")"#));
}

#[rstest]
fn test_load_entries_parse() {
    let module = LuaModule::from_yaml("load:\n  - cmake\n  - hdf5: 1.14\n").unwrap();
    assert_eq!(module.load.len(), 2);
    assert_eq!(module.load[0], LoadEntry::Name("cmake".to_string()));
    assert!(matches!(&module.load[1], LoadEntry::Versioned(v) if v.contains_key("hdf5")));
}

#[rstest]
fn test_write_lua() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("toolchain.lua");
    let module = LuaModule {
        family: vec!["compiler".to_string()],
        ..Default::default()
    };

    write_lua(&module, &path).expect("Should write module");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("-- -*- lua -*-\n-- Author: "));
    assert!(contents.contains("-- Family.\nfamily(\"compiler\")\n"));
}

#[rstest]
fn test_write_lua_to_missing_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("module.lua");
    let result = write_lua(&LuaModule::default(), &path);
    assert!(matches!(result, Err(Error::WriteFailed { .. })));
}

#[rstest]
fn test_multiline_description_stays_in_comments_and_strings() {
    let module =
        LuaModule::from_yaml("description: |\n  Line one\n  Line two\n").expect("Should parse");
    let rendered = module.render("tester", created());

    assert!(rendered.contains("--\n-- Line one\n-- Line two\n--\n"), "{rendered}");
    assert!(
        rendered.contains("whatis(\"Description: Line one\\nLine two\")\n"),
        "{rendered}"
    );

    let code_prefixes = ["--", "local ", "whatis(\""];
    for line in rendered.lines().filter(|line| !line.is_empty()) {
        assert!(
            code_prefixes.iter().any(|prefix| line.starts_with(prefix)),
            "line outside a comment or statement: {line:?}"
        );
    }
}

#[rstest]
fn test_carriage_returns_are_escaped() {
    let module = LuaModule {
        setenv: vec![IndexMap::from([(
            "BANNER".to_string(),
            Value::String("a\r\nb".to_string()),
        )])],
        ..Default::default()
    };
    let rendered = module.render("tester", created());
    assert!(rendered.contains(r#"setenv("BANNER", "a\r\nb")"#), "{rendered}");
}

#[rstest]
#[case("Loads the toolchain.", "help([[\nLoads the toolchain.\n]])\n")]
#[case("Index with t[a[1]].", "help([=[\nIndex with t[a[1]].\n]=])\n")]
#[case("Both ]] and ]=] appear.", "help([==[\nBoth ]] and ]=] appear.\n]==])\n")]
fn test_help_long_bracket_is_not_closed_by_text(#[case] help: &str, #[case] expected: &str) {
    let module = LuaModule {
        help: Some(help.to_string()),
        ..Default::default()
    };
    let rendered = module.render("tester", created());
    assert!(rendered.contains(expected), "{rendered}");
}
