mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn siege_show_returns_the_full_group_tree() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/settings/sieges/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Siège trouvé");

    let groupes = body["data"]["groupes"].as_array().unwrap();
    assert_eq!(groupes.len(), 2);

    let paie = groupes.iter().find(|g| g["libelle"] == "Paie").unwrap();
    let membres = paie["membres"].as_array().unwrap();
    assert_eq!(membres.len(), 2);

    // Members carry a display projection of their employee record.
    let anne = membres.iter().find(|m| m["employe_id"] == 1).unwrap();
    assert_eq!(anne["employe"]["nom"], "Durand");
    assert_eq!(anne["employe"]["prenom"], "Anne");
    assert!(anne["employe"].get("departement_id").is_none());
    Ok(())
}

#[tokio::test]
async fn siege_list_enriches_every_row() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/settings/sieges", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recordsTotal"], 2);

    let sieges = body["data"].as_array().unwrap();
    let paris = sieges.iter().find(|s| s["code"] == "PAR").unwrap();
    let lyon = sieges.iter().find(|s| s["code"] == "LYO").unwrap();
    assert_eq!(paris["groupes"].as_array().unwrap().len(), 2);
    assert_eq!(lyon["groupes"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn joins_are_recomputed_per_request() -> Result<()> {
    let app = common::test_app();

    // Attach a new group through the generic router, then re-read the siege.
    let (status, _) = common::send(
        &app,
        Method::POST,
        "/groupes",
        Some(json!({"id": 13, "siege_id": 2, "libelle": "Formation"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = common::send(&app, Method::GET, "/settings/sieges/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    let groupes = body["data"]["groupes"].as_array().unwrap();
    assert_eq!(groupes.len(), 2);
    assert!(groupes.iter().any(|g| g["libelle"] == "Formation"));
    Ok(())
}

#[tokio::test]
async fn enrichment_is_read_only() -> Result<()> {
    let (app, repo) = common::test_context();

    let (status, _) = common::send(&app, Method::GET, "/settings/sieges/1", None).await?;
    assert_eq!(status, StatusCode::OK);

    // The stored record never grows a materialized `groupes` field.
    let stored = repo.find("sieges", "1").unwrap();
    assert!(stored.get("groupes").is_none());
    Ok(())
}

#[tokio::test]
async fn siege_writes_go_through_the_regular_engine() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/settings/sieges",
        Some(json!({"code": "PAR", "libelle": "Paris bis"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT, "duplicate code: {}", body);

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/settings/sieges",
        Some(json!({"code": "NAN", "libelle": "Nantes"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Siège créé");

    let (status, body) = common::send(
        &app,
        Method::PUT,
        "/settings/sieges/2",
        Some(json!({"libelle": "Lyon Part-Dieu"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["libelle"], "Lyon Part-Dieu");
    Ok(())
}
