use super::*;
use clap::CommandFactory;

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_parse() {
    let opt = Opt::try_parse_from(["catc", "--locale", "fr", "--dump", "json", "-a", "a.msg", "b.msg"]).unwrap();
    assert_eq!(opt.locale, "fr");
    assert_eq!(opt.dump, DumpFormat::Json);
    assert!(opt.all_errors);
    assert_eq!(opt.files, [PathBuf::from("a.msg"), PathBuf::from("b.msg")]);
    assert_eq!(opt.bootstrap.config, None);
}

#[test]
fn test_files_required() {
    assert!(Opt::try_parse_from(["catc", "--locale", "fr"]).is_err());
}

#[test]
fn test_bootstrap_ignores_other_args() {
    let opt = BootstrapOpt::parse_from(["catc", "--config", "my.toml", "--locale", "fr", "a.msg"]);
    assert_eq!(opt.args.config, Some(PathBuf::from("my.toml")));
}

#[test]
fn test_command_name() {
    assert_eq!(Opt::command().get_name(), config::APP_NAME);
}
