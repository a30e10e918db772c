use ontoquery::{schema::IdentCase, Db, OntologyQuery, UnknownFieldPolicy};
use pretty_assertions::assert_eq;
use tests::Fleet;

#[tokio::test]
async fn ident_case_override() {
    let fleet = Fleet::new();
    let db = fleet
        .db_with(Db::builder().ident_case(IdentCase::Preserve))
        .await;

    let query = OntologyQuery::new("Vehicle").select(["plate"]).filter("mileage", 15000);
    let result = db.query(&query).await.unwrap();

    assert_eq!(
        fleet.log().pop().0,
        r#"SELECT "plate_no" FROM "vehicles" WHERE "km" = ?1;"#
    );
    assert_eq!(result.columns, ["plate"]);

    // The override wins over the source's own setting
    db.query(&OntologyQuery::new("Depot").select(["city"])).await.unwrap();
    assert_eq!(fleet.log().pop().0, r#"SELECT "city_name" FROM "depots";"#);
}

#[tokio::test]
async fn reject_unknown_fields() {
    let fleet = Fleet::new();
    let db = fleet
        .db_with(Db::builder().unknown_fields(UnknownFieldPolicy::Reject))
        .await;

    for (query, message) in [
        (
            OntologyQuery::new("Vehicle").filter("wheels", 4),
            "invalid query: unknown field `wheels` in where",
        ),
        (
            OntologyQuery::new("Vehicle").select(["wheels"]),
            "invalid query: unknown field `wheels` in select",
        ),
        (
            OntologyQuery::new("Vehicle")
                .select(["plate"])
                .order_by("mileage", Default::default()),
            "invalid query: unknown field `mileage` in orderBy",
        ),
    ] {
        let err = db.query(&query).await.unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    assert!(fleet.log().is_empty());
}

#[tokio::test]
async fn explain_matches_executed_statement() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::new("Vehicle")
        .select(["plate", "model"])
        .filter("plate", "京A·12345")
        .limit(1);

    assert_eq!(
        db.explain(&query).unwrap(),
        r#"SELECT "PLATE_NO", "MODEL_NAME" FROM "VEHICLES" WHERE "PLATE_NO" = '京A·12345' LIMIT 1;"#
    );
    assert!(fleet.log().is_empty());

    let result = db.query(&query).await.unwrap();
    let (sql, params) = fleet.log().pop();
    assert_eq!(
        sql,
        r#"SELECT "PLATE_NO", "MODEL_NAME" FROM "VEHICLES" WHERE "PLATE_NO" = ?1 LIMIT 1;"#
    );
    assert_eq!(params, [tests::Value::from("京A·12345")]);

    // Non-ASCII text comes back untouched
    assert_eq!(
        result.get(0, "plate"),
        Some(&tests::Value::from("京A·12345"))
    );
}
