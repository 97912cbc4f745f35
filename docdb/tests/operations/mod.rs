use anyhow::Result;
use chrono::TimeZone;
use docdb::{Context, Credential, ErrorKind, RequestSigner, Session};
use docdb_core::Signer;
use http::Method;
use pretty_assertions::assert_eq;

use crate::mock::MockHttpSend;

const CONN_STR: &str =
    "AccountEndpoint=https://x.documents.azure.com:443/;AccountKey=ZG9jZGItdGVzdC1tYXN0ZXIta2V5;";

fn init_session(mock: &MockHttpSend) -> Session {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Session::new(ctx, CONN_STR).expect("connection string must be valid")
}

#[tokio::test]
async fn test_list_databases() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"Databases":[{"id":"db1"}]}"#);
    let session = init_session(&mock);

    let dbs = session.list_databases().await?;
    assert_eq!(dbs.len(), 1);
    assert_eq!(dbs[0].id(), "db1");
    assert_eq!(dbs[0].session().endpoint(), session.endpoint());

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::GET);
    assert_eq!(reqs[0].uri.to_string(), "https://x.documents.azure.com:443/dbs");
    assert!(reqs[0]
        .headers
        .get("authorization")
        .expect("authorization must be set")
        .to_str()?
        .starts_with("type%3Dmaster%26ver%3D1.0%26sig%3D"));
    assert!(reqs[0].headers.contains_key("x-ms-date"));
    assert_eq!(reqs[0].headers["x-ms-version"], "2015-12-16");
    assert!(!reqs[0].headers.contains_key("content-type"));
    Ok(())
}

#[tokio::test]
async fn test_list_databases_signature() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"Databases":[]}"#);
    let time = chrono::Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    let session = Session::with_signer(
        "https://x.documents.azure.com:443/",
        Signer::new(
            Context::new().with_http_send(mock.clone()),
            Credential::new("ZG9jZGItdGVzdC1tYXN0ZXIta2V5"),
            RequestSigner::new().with_time(time),
        ),
    );

    let dbs = session.list_databases().await?;
    assert!(dbs.is_empty());

    let reqs = mock.requests();
    let req = &reqs[0];
    assert_eq!(
        req.headers["authorization"],
        "type%3Dmaster%26ver%3D1.0%26sig%3DhC9S%2FyUY7IoegGROPkhs6ub03So2VMGk0D4DcqNk1Qc%3D"
    );
    assert_eq!(req.headers["x-ms-date"], "Mon, 02 Jan 2006 15:04:05 GMT");
    Ok(())
}

#[tokio::test]
async fn test_list_databases_not_found() -> Result<()> {
    let mock = MockHttpSend::new().respond(404, r#"{"message":"not found"}"#);
    let session = init_session(&mock);

    let err = session.list_databases().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("GET /dbs"));
    Ok(())
}

#[tokio::test]
async fn test_get_database_then_list_collections() -> Result<()> {
    let mock = MockHttpSend::new()
        .respond(200, r#"{"id":"db1","_rid":"8YBJAA==","_ts":1459200611}"#)
        .respond(
            200,
            r#"{"_rid":"8YBJAA==","DocumentCollections":[{"id":"c1"},{"id":"c2"}],"_count":2}"#,
        );
    let session = init_session(&mock);

    let db = session.get_database("db1").await?;
    assert_eq!(db.id(), "db1");
    assert_eq!(db.info().rid.as_deref(), Some("8YBJAA=="));

    let colls = db.list_collections().await?;
    let ids: Vec<&str> = colls.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert!(colls.iter().all(|c| c.database().id() == "db1"));

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].uri.path(), "/dbs/db1");
    assert_eq!(reqs[1].uri.path(), "/dbs/db1/colls");
    for req in &reqs {
        assert_eq!(req.headers["x-ms-version"], "2015-12-16");
    }
    Ok(())
}

#[tokio::test]
async fn test_get_collection() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"id":"c1"}"#);
    let session = init_session(&mock);

    let coll = session.database("db1").get_collection("c1").await?;
    assert_eq!(coll.id(), "c1");
    assert_eq!(coll.database().id(), "db1");
    assert_eq!(mock.requests()[0].uri.path(), "/dbs/db1/colls/c1");
    Ok(())
}

#[tokio::test]
async fn test_get_collection_not_found() -> Result<()> {
    let mock = MockHttpSend::new().respond(
        404,
        r#"{"code":"NotFound","message":"Owner resource does not exist"}"#,
    );
    let session = init_session(&mock);

    let err = session
        .database("db1")
        .get_collection("missing")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.to_string().contains("get collection missing"));
    assert!(err.to_string().contains("Owner resource does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_create_collection() -> Result<()> {
    let mock = MockHttpSend::new().respond(201, r#"{"id":"c1","_rid":"8YBJAN3kmQA="}"#);
    let session = init_session(&mock);

    let coll = session.database("db1").create_collection("c1").await?;
    assert_eq!(coll.id(), "c1");
    assert_eq!(coll.database().id(), "db1");

    let reqs = mock.requests();
    let req = &reqs[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.path(), "/dbs/db1/colls");
    assert_eq!(req.headers["content-type"], "application/query+json");
    assert_eq!(req.body.as_ref(), br#"{"id":"c1"}"#);
    Ok(())
}

#[tokio::test]
async fn test_create_collection_conflict() -> Result<()> {
    let mock = MockHttpSend::new().respond(
        409,
        r#"{"code":"Conflict","message":"Resource with specified id or name already exists."}"#,
    );
    let session = init_session(&mock);

    let err = session
        .database("db1")
        .create_collection("c1")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.to_string().contains("already exists"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_key_sends_nothing() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"Databases":[]}"#);
    let ctx = Context::new().with_http_send(mock.clone());
    let session = Session::new(
        ctx,
        "AccountEndpoint=https://x.documents.azure.com:443/;AccountKey=not base64!;",
    )?;

    let err = session.list_databases().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyDecode);
    assert!(mock.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"Databases": "#);
    let session = init_session(&mock);

    let err = session.list_databases().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    Ok(())
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"DocumentCollections":[]}"#);
    let session = init_session(&mock);

    let err = session.list_databases().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    Ok(())
}

#[tokio::test]
async fn test_transport_error() -> Result<()> {
    let mock = MockHttpSend::new().fail("connection refused");
    let session = init_session(&mock);

    let err = session.get_database("db1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}

#[tokio::test]
async fn test_sessions_are_shared_across_tasks() -> Result<()> {
    let mut mock = MockHttpSend::new();
    for i in 0..4 {
        mock = mock.respond(200, &format!(r#"{{"id":"db{i}"}}"#));
    }
    let session = init_session(&mock);

    let mut handles = Vec::new();
    for i in 0..4 {
        let session = session.clone();
        handles.push(tokio::spawn(async move {
            session.get_database(&format!("db{i}")).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(mock.requests().len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_endpoint_with_path_prefix() -> Result<()> {
    let mock = MockHttpSend::new()
        .respond(200, r#"{"Databases":[{"id":"db1"}]}"#)
        .respond(200, r#"{"DocumentCollections":[{"id":"c1"}]}"#);
    let time = chrono::Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    let session = Session::with_signer(
        "https://gw.example.com/cosmos/",
        Signer::new(
            Context::new().with_http_send(mock.clone()),
            Credential::new("ZG9jZGItdGVzdC1tYXN0ZXIta2V5"),
            RequestSigner::new().with_time(time),
        ),
    );

    let dbs = session.list_databases().await?;
    let colls = dbs[0].list_collections().await?;
    assert_eq!(colls[0].id(), "c1");

    let reqs = mock.requests();
    assert_eq!(reqs[0].uri.to_string(), "https://gw.example.com/cosmos/dbs");
    assert_eq!(
        reqs[0].headers["authorization"],
        "type%3Dmaster%26ver%3D1.0%26sig%3DhC9S%2FyUY7IoegGROPkhs6ub03So2VMGk0D4DcqNk1Qc%3D"
    );
    assert_eq!(reqs[1].uri.path(), "/cosmos/dbs/db1/colls");
    Ok(())
}

#[tokio::test]
async fn test_endpoint_with_path_prefix_from_connection_string() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"Databases":[]}"#);
    let ctx = Context::new().with_http_send(mock.clone());
    let session = Session::new(
        ctx,
        "AccountEndpoint=https://gw.example.com/cosmos/;AccountKey=Zm9v;",
    )?;

    assert!(session.list_databases().await?.is_empty());
    assert_eq!(mock.requests()[0].uri.path(), "/cosmos/dbs");
    Ok(())
}

#[tokio::test]
async fn test_invalid_id_sends_nothing() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, r#"{"id":"a"}"#);
    let session = init_session(&mock);

    let err = session.get_database("a/b").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(err.to_string().contains("invalid resource id `a/b`"));

    let err = session
        .database("db1")
        .create_collection("c#1")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    let err = session
        .database("db?")
        .list_collections()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    assert!(mock.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_redirect_is_request_error() -> Result<()> {
    let mock = MockHttpSend::new()
        .respond(304, "")
        .respond(307, r#"{"message":"moved"}"#);
    let session = init_session(&mock);

    let err = session.get_database("db1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.to_string().contains("304"));

    let err = session.list_databases().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.to_string().contains("moved"));
    Ok(())
}
