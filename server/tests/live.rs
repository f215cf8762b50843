//! Create/update/list over a real socket.
//!
//! Starts the server on a random port and talks to it with ureq, so the
//! router, extractor and error mapping are exercised through actual HTTP.

use todo_core::Todo;

struct Reply {
    status: u16,
    body: String,
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn send(agent: &ureq::Agent, method: &str, url: &str, body: Option<&str>) -> Reply {
    let mut response = match (method, body) {
        ("GET", _) => agent.get(url).call(),
        ("POST", Some(body)) => agent
            .post(url)
            .content_type("application/json")
            .send(body.as_bytes()),
        ("PUT", Some(body)) => agent
            .put(url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (other, _) => panic!("unsupported request: {other}"),
    }
    .expect("HTTP transport error");

    Reply {
        status: response.status().as_u16(),
        body: response.body_mut().read_to_string().unwrap_or_default(),
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn lifecycle_over_http() {
    let base = start_server();
    let agent = agent();
    let todos_url = format!("{base}/todos");

    // Step 1: list is empty.
    let reply = send(&agent, "GET", &todos_url, None);
    assert_eq!(reply.status, 200);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create rejects empty text.
    let reply = send(&agent, "POST", &todos_url, Some(r#"{"text":"","done":false}"#));
    assert_eq!(reply.status, 422);

    // Step 3: create.
    let reply = send(
        &agent,
        "POST",
        &todos_url,
        Some(r#"{"id":"client-sent","text":"Buy Milk","done":false}"#),
    );
    assert_eq!(reply.status, 201);
    let created: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_ne!(created.id, "client-sent");
    assert_eq!(created.text, "Buy Milk");

    // Step 4: update.
    let reply = send(
        &agent,
        "PUT",
        &format!("{todos_url}/{}", created.id),
        Some(r#"{"text":"Buy snacks","done":true}"#),
    );
    assert_eq!(reply.status, 200);
    let updated: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "Buy snacks");
    assert!(updated.done);

    // Step 5: update of an unknown id.
    let reply = send(
        &agent,
        "PUT",
        &format!("{todos_url}/999"),
        Some(r#"{"text":"Buy snacks","done":true}"#),
    );
    assert_eq!(reply.status, 404);

    // Step 6: list holds exactly the updated todo.
    let reply = send(&agent, "GET", &todos_url, None);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(todos, vec![updated]);
}
