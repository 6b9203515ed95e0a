// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn help_exits_successfully() {
    altcase_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("altcase"));
}

#[test]
fn version_exits_successfully() {
    altcase_cmd().arg("--version").assert().success();
}

#[test]
fn no_args_prints_default_text() {
    altcase_cmd()
        .assert()
        .success()
        .stdout("tHiS Is sOmE TeXt wItH AlTeRnAtE CaSe\n")
        .stderr("");
}

#[test]
fn one_arg_is_transformed() {
    altcase_cmd()
        .arg("Rust is FUN!")
        .assert()
        .success()
        .stdout("rUsT Is fUn!\n");
}

#[test]
fn empty_arg_prints_empty_line() {
    altcase_cmd().arg("").assert().success().stdout("\n");
}

#[test]
fn unicode_arg_is_transformed() {
    altcase_cmd().arg("ÉCOLE").assert().success().stdout("éCoLe\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    altcase_cmd()
        .env("ALTCASE_LOG", "debug")
        .arg("ab")
        .assert()
        .success()
        .stdout("aB\n")
        .stderr(predicates::str::contains("input"));
}

#[test]
fn hyphen_arg_is_transformed_verbatim() {
    altcase_cmd().arg("-abc").assert().success().stdout("-AbC\n");
}

#[test]
fn extra_args_are_ignored() {
    altcase_cmd()
        .args(["one", "two", "-x"])
        .assert()
        .success()
        .stdout("oNe\n");
}
