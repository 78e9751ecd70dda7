use super::*;

#[test]
fn authenticated_gate_admits_active_session() {
    let session = SessionContext::in_memory();
    session.mark_active();
    assert_eq!(RouteGate::authenticated().evaluate(&session, "/jobs/1"), GateDecision::Admit);
}

#[test]
fn authenticated_gate_redirects_guest_with_origin() {
    let session = SessionContext::in_memory();
    assert_eq!(
        RouteGate::authenticated().evaluate(&session, "/jobs/42?tab=edit"),
        GateDecision::Redirect("/login?from=%2Fjobs%2F42%3Ftab%3Dedit".to_owned())
    );
}

#[test]
fn authenticated_gate_omits_home_origin() {
    let session = SessionContext::in_memory();
    assert_eq!(
        RouteGate::authenticated().evaluate(&session, "/"),
        GateDecision::Redirect("/login".to_owned())
    );
}

#[test]
fn guest_gate_follows_remembered_origin() {
    let session = SessionContext::in_memory();
    session.mark_active();
    assert_eq!(
        RouteGate::guest().evaluate(&session, "/login?from=%2Fjobs%2F42"),
        GateDecision::Redirect("/jobs/42".to_owned())
    );
    assert_eq!(
        RouteGate::guest().evaluate(&session, "/login?from=https%3A%2F%2Fevil.test"),
        GateDecision::Redirect("/".to_owned())
    );
}

#[test]
fn guest_gate_admits_guest_and_redirects_member_home() {
    let session = SessionContext::in_memory();
    assert_eq!(RouteGate::guest().evaluate(&session, "/login"), GateDecision::Admit);
    session.store_token("t");
    assert_eq!(RouteGate::guest().evaluate(&session, "/login"), GateDecision::Redirect("/".to_owned()));
}

#[test]
fn gate_decision_tracks_session_changes() {
    let session = SessionContext::in_memory();
    let gate = RouteGate::authenticated();
    session.mark_active();
    assert_eq!(gate.evaluate(&session, "/update-profile"), GateDecision::Admit);
    session.mark_inactive();
    assert!(matches!(gate.evaluate(&session, "/update-profile"), GateDecision::Redirect(_)));
}

#[test]
fn custom_gate_uses_its_own_predicate() {
    let gate = RouteGate::new(|_| false, "/maintenance", OriginPolicy::Ignore);
    let session = SessionContext::in_memory();
    session.mark_active();
    assert_eq!(gate.evaluate(&session, "/jobs"), GateDecision::Redirect("/maintenance".to_owned()));
}

#[test]
fn login_round_trip_restores_requested_route() {
    let session = SessionContext::in_memory();
    let GateDecision::Redirect(login_url) = RouteGate::authenticated().evaluate(&session, "/jobs/42") else {
        panic!("guest should be redirected");
    };
    let (path, query) = login_url.split_once('?').unwrap();
    assert_eq!(path, LOGIN_ROUTE);
    assert_eq!(query, "from=%2Fjobs%2F42");
    assert_eq!(query_value(&login_url, FROM_PARAM).as_deref(), Some("/jobs/42"));

    // The login page is guest-only; once the session is active its gate
    // sends the user back where they started.
    assert_eq!(RouteGate::guest().evaluate(&session, &login_url), GateDecision::Admit);
    session.mark_active();
    let GateDecision::Redirect(target) = RouteGate::guest().evaluate(&session, &login_url) else {
        panic!("member should leave the login page");
    };
    assert_eq!(target, "/jobs/42");
    assert_eq!(RouteGate::authenticated().evaluate(&session, &target), GateDecision::Admit);
}

#[test]
fn followed_origin_must_be_local_path() {
    let session = SessionContext::in_memory();
    session.mark_active();
    let follow = |location: &str| match RouteGate::guest().evaluate(&session, location) {
        GateDecision::Redirect(to) => to,
        GateDecision::Admit => panic!("member admitted to guest route"),
    };
    assert_eq!(follow("/login"), "/");
    assert_eq!(follow("/login?from=%2F%2Fevil.test"), "/");
    assert_eq!(follow("/login?from=%2F%5Cevil.test"), "/");
    assert_eq!(follow("/signup?from=%2F%3Fpage%3D2"), "/?page=2");
    assert_eq!(follow("/login?x=1&from=%2Fupdate-profile"), "/update-profile");
}

#[test]
fn current_location_joins_search() {
    assert_eq!(current_location("/", ""), "/");
    assert_eq!(current_location("/", "?page=2"), "/?page=2");
    assert_eq!(current_location("/jobs/1", "tab=x"), "/jobs/1?tab=x");
}
