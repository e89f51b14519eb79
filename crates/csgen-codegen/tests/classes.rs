use csgen_codegen::{generate, generate_with, Class};
use csgen_core::catalog::{Catalog, Column, Identifier, Schema, Table};
use csgen_core::{Config, Request, Settings};

use pretty_assertions::assert_eq;

fn authors_table() -> Table {
    Table::new(Identifier::new("public", "authors"))
        .column(Column::new("id", "bigserial").not_null())
        .column(Column::new("name", "text").not_null().comment("Full name"))
        .column(Column::new("bio", "text"))
}

fn request(catalog: Catalog) -> Request {
    Request {
        settings: Settings::default(),
        catalog,
        ..Request::default()
    }
}

fn member_names(class: &Class) -> Vec<&str> {
    class.members.iter().map(|m| m.name.as_str()).collect()
}

fn strip_s(name: &str) -> String {
    name.strip_suffix('s').unwrap_or(name).to_string()
}

#[test]
fn table_becomes_singular_class() {
    let catalog = Catalog::new("public").schema(Schema::new("public").table(authors_table()));
    let output = generate(&request(catalog), &Config::default()).unwrap();

    let [class] = &output.classes[..] else {
        panic!("expected one class; actual={:#?}", output.classes);
    };

    assert_eq!(class.name, "Author");
    assert_eq!(class.table, Some(Identifier::new("public", "authors")));
    assert_eq!(member_names(class), ["ID", "Name", "Bio"]);

    let types: Vec<_> = class.members.iter().map(|m| m.ty.as_str()).collect();
    assert_eq!(types, ["long", "string", "string"]);

    assert_eq!(class.members[1].comment, "Full name");
    assert_eq!(class.members[1].db_name, "name");
}

#[test]
fn not_null_flag_follows_null_operators() {
    let catalog = Catalog::new("public").schema(Schema::new("public").table(authors_table()));

    let output = generate(&request(catalog.clone()), &Config::default()).unwrap();
    assert!(output.classes[0].members.iter().all(|m| !m.not_null));

    let config = Config {
        emit_null_operators: true,
        ..Config::default()
    };
    let output = generate(&request(catalog), &config).unwrap();
    let flags: Vec<_> = output.classes[0].members.iter().map(|m| m.not_null).collect();
    assert_eq!(flags, [true, true, false]);

    let types: Vec<_> = output.classes[0].members.iter().map(|m| m.ty.as_str()).collect();
    assert_eq!(types, ["long", "string", "string?"]);
}

#[test]
fn exact_table_names_skip_inflection() {
    let catalog = Catalog::new("public").schema(Schema::new("public").table(authors_table()));
    let config = Config {
        emit_exact_table_names: true,
        ..Config::default()
    };

    let output = generate(&request(catalog), &config).unwrap();
    assert_eq!(output.classes[0].name, "Authors");
}

#[test]
fn excluded_tables_are_not_singularized() {
    let catalog = Catalog::new("public").schema(
        Schema::new("public")
            .table(authors_table())
            .table(Table::new(Identifier::new("public", "books"))),
    );
    let config = Config {
        inflection_exclude_table_names: vec!["AUTHORS".to_string()],
        ..Config::default()
    };

    let output = generate_with(&request(catalog), &config, &strip_s).unwrap();
    let names: Vec<_> = output.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Authors", "Book"]);
}

#[test]
fn non_default_schemas_are_prefixed_and_system_schemas_skipped() {
    let catalog = Catalog::new("public")
        .schema(Schema::new("public").table(authors_table()))
        .schema(
            Schema::new("audit").table(
                Table::new(Identifier::new("audit", "events"))
                    .column(Column::new("event_id", "uuid").not_null()),
            ),
        )
        .schema(
            Schema::new("pg_catalog").table(
                Table::new(Identifier::new("pg_catalog", "pg_types"))
                    .column(Column::new("oid", "oid")),
            ),
        );

    let output = generate_with(&request(catalog), &Config::default(), &strip_s).unwrap();

    let names: Vec<_> = output.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["AuditEvent", "Author"]);

    assert_eq!(member_names(&output.classes[0]), ["EventID"]);
    assert_eq!(
        output.classes[0].table,
        Some(Identifier::new("audit", "events"))
    );
}

#[test]
fn renames_apply_to_classes_and_members() {
    let catalog = Catalog::new("public").schema(Schema::new("public").table(authors_table()));
    let mut req = request(catalog);
    req.settings = Settings::default()
        .rename("authors", "Writer")
        .rename("bio", "Biography");

    let config = Config {
        emit_exact_table_names: true,
        ..Config::default()
    };
    let output = generate(&req, &config).unwrap();

    assert_eq!(output.classes[0].name, "Writer");
    assert_eq!(member_names(&output.classes[0]), ["ID", "Name", "Biography"]);
}
