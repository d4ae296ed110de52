use super::*;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["hortonmap", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Db {
            command: DbCommands::Ping
        }
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["hortonmap", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Db {
            command: DbCommands::Migrate
        }
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["hortonmap"]).is_err());
}

#[test]
fn parse_requires_a_path() {
    assert!(Cli::try_parse_from(["hortonmap", "parse"]).is_err());
}

#[test]
fn parse_with_pretty_flag() {
    let cli = Cli::try_parse_from(["hortonmap", "parse", "data/locations.csv", "--pretty"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Parse { ref path, pretty: true } if path == std::path::Path::new("data/locations.csv")
    ));
}

#[test]
fn load_path_is_optional() {
    let cli = Cli::try_parse_from(["hortonmap", "load"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Load {
            path: None,
            dry_run: false
        }
    ));
}

#[test]
fn load_dry_run_with_path() {
    let cli = Cli::try_parse_from(["hortonmap", "load", "export.csv", "--dry-run"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Load {
            path: Some(_),
            dry_run: true
        }
    ));
}

#[test]
fn query_all() {
    let cli = Cli::try_parse_from(["hortonmap", "query", "all"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Query {
            command: QueryCommands::All
        }
    ));
}

#[test]
fn query_id_parses_uuid() {
    let cli = Cli::try_parse_from([
        "hortonmap",
        "query",
        "id",
        "67e55044-10b1-426f-9247-bb680e5fe0c8",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Query {
            command: QueryCommands::Id { id }
        } if id.to_string() == "67e55044-10b1-426f-9247-bb680e5fe0c8"
    ));
}

#[test]
fn query_id_rejects_non_uuid() {
    assert!(Cli::try_parse_from(["hortonmap", "query", "id", "120034"]).is_err());
}

#[test]
fn query_bbox_accepts_negative_longitudes() {
    let cli = Cli::try_parse_from([
        "hortonmap",
        "query",
        "bbox",
        "--ne-lat",
        "54.4567",
        "--ne-long",
        "-60.234",
        "--sw-lat",
        "39.3456",
        "--sw-long",
        "-83.2345",
    ])
    .unwrap();
    match cli.command {
        Commands::Query {
            command:
                QueryCommands::Bbox {
                    ne_lat,
                    ne_long,
                    sw_lat,
                    sw_long,
                },
        } => {
            assert_eq!(
                (ne_lat, ne_long, sw_lat, sw_long),
                (54.4567, -60.234, 39.3456, -83.2345)
            );
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn query_bbox_requires_all_corners() {
    assert!(Cli::try_parse_from(["hortonmap", "query", "bbox", "--ne-lat", "1"]).is_err());
}
