//! Every endpoint method against the route it has to hit.

use http::Method;
use serde_json::{json, Value};

use pve_api::nodes::{Ceph, GuestStatus, LxcVm, QemuVm};
use pve_api::{Error, PveApi, ResponseFormat};

mod common;
use common::{Call, RecordingExecutor};

type Api<'a> = PveApi<&'a RecordingExecutor>;

#[track_caller]
fn check<T>(
    op: impl FnOnce(&Api<'_>) -> Result<T, Error>,
    method: Method,
    path: &str,
    params: Option<Value>,
) {
    check_call(op, Call::new(method, path, params));
}

#[track_caller]
fn check_call<T>(op: impl FnOnce(&Api<'_>) -> Result<T, Error>, expected: Call) {
    let executor = RecordingExecutor::new();
    let api = PveApi::new(&executor);

    if let Err(err) = op(&api) {
        panic!("call to {} failed: {err}", expected.path);
    }

    assert_eq!(executor.single_call(), expected);
}

fn p() -> Value {
    json!({ "p": 1 })
}

fn vm<'a>(api: &Api<'a>) -> QemuVm<&'a RecordingExecutor> {
    api.nodes().node("pve1").qemu().vmid(100)
}

fn ct<'a>(api: &Api<'a>) -> LxcVm<&'a RecordingExecutor> {
    api.nodes().node("pve1").lxc().vmid(101)
}

fn status<'a>(api: &Api<'a>) -> GuestStatus<&'a RecordingExecutor> {
    vm(api).status()
}

fn ceph<'a>(api: &Api<'a>) -> Ceph<&'a RecordingExecutor> {
    api.nodes().node("pve1").ceph()
}

#[test]
fn root() {
    check(|api| api.get_version(), Method::GET, "/version", None);
}

#[test]
fn access() {
    check(|api| api.access().get(), Method::GET, "/access/", None);
    check(|api| api.access().get_acl(), Method::GET, "/access/acl", None);
    check(|api| api.access().put_acl(&p()), Method::PUT, "/access/acl", Some(p()));
    check(
        |api| api.access().get_permissions(&p()),
        Method::GET,
        "/access/permissions",
        Some(p()),
    );
    check(
        |api| api.access().put_password(&p()),
        Method::PUT,
        "/access/password",
        Some(p()),
    );
    check(|api| api.access().put_tfa(&p()), Method::PUT, "/access/tfa", Some(p()));
    check(|api| api.access().post_tfa(&p()), Method::POST, "/access/tfa", Some(p()));
    check(
        |api| api.access().post_ticket(&p()),
        Method::POST,
        "/access/ticket",
        Some(p()),
    );
}

#[test]
fn access_collections() {
    check(|api| api.access().domains().get(), Method::GET, "/access/domains/", None);
    check(
        |api| api.access().domains().post(&p()),
        Method::POST,
        "/access/domains/",
        Some(p()),
    );
    check(
        |api| api.access().domains().realm("ldap").put(&p()),
        Method::PUT,
        "/access/domains/ldap/",
        Some(p()),
    );
    check(
        |api| api.access().domains().realm("ldap").post_sync(&p()),
        Method::POST,
        "/access/domains/ldap/sync",
        Some(p()),
    );
    check(
        |api| api.access().groups().group("admins").get(),
        Method::GET,
        "/access/groups/admins/",
        None,
    );
    check(
        |api| api.access().roles().role("PVEAuditor").delete(),
        Method::DELETE,
        "/access/roles/PVEAuditor/",
        None,
    );
    check(|api| api.access().users().get(), Method::GET, "/access/users/", None);
    check(
        |api| api.access().users().user("root@pam").get_tfa(),
        Method::GET,
        "/access/users/root@pam/tfa",
        None,
    );
    check(
        |api| api.access().users().user("root@pam").get_token(),
        Method::GET,
        "/access/users/root@pam/token",
        None,
    );
}

#[test]
fn cluster() {
    check(|api| api.cluster().get(), Method::GET, "/cluster/", None);
    check(|api| api.cluster().get_status(), Method::GET, "/cluster/status", None);
    check(|api| api.cluster().get_tasks(), Method::GET, "/cluster/tasks", None);
    check(
        |api| api.cluster().get_resources(&p()),
        Method::GET,
        "/cluster/resources",
        Some(p()),
    );
    check(
        |api| api.cluster().get_nextid(&p()),
        Method::GET,
        "/cluster/nextid",
        Some(p()),
    );
    check(|api| api.cluster().get_log(&p()), Method::GET, "/cluster/log", Some(p()));

    check(|api| api.cluster().ceph().get(), Method::GET, "/cluster/ceph/", None);
    check(
        |api| api.cluster().ceph().get_status(),
        Method::GET,
        "/cluster/ceph/status",
        None,
    );
    check(
        |api| api.cluster().ceph().get_metadata(&p()),
        Method::GET,
        "/cluster/ceph/metadata",
        Some(p()),
    );
    check(
        |api| api.cluster().ceph().flags().put(&p()),
        Method::PUT,
        "/cluster/ceph/flags/",
        Some(p()),
    );
    check(
        |api| api.cluster().ceph().flags().flag("noout").get(),
        Method::GET,
        "/cluster/ceph/flags/noout/",
        None,
    );
}

#[test]
fn firewall() {
    check(
        |api| api.cluster().firewall().get_options(),
        Method::GET,
        "/cluster/firewall/options",
        None,
    );
    check(
        |api| api.cluster().firewall().get_refs(&p()),
        Method::GET,
        "/cluster/firewall/refs",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").firewall().put_options(&p()),
        Method::PUT,
        "/nodes/pve1/firewall/options",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").firewall().get_log(&p()),
        Method::GET,
        "/nodes/pve1/firewall/log",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").qemu().vmid(100).firewall().rules().post(&p()),
        Method::POST,
        "/nodes/pve1/qemu/100/firewall/rules/",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").lxc().vmid(101).firewall().rules().pos(0).put(&p()),
        Method::PUT,
        "/nodes/pve1/lxc/101/firewall/rules/0/",
        Some(p()),
    );
}

#[test]
fn nodes() {
    check(|api| api.nodes().get(), Method::GET, "/nodes/", None);
    check(|api| api.nodes().node("pve1").get(), Method::GET, "/nodes/pve1/", None);
    check(
        |api| api.nodes().node("pve1").get_status(),
        Method::GET,
        "/nodes/pve1/status",
        None,
    );
    check(
        |api| api.nodes().node("pve1").post_status(&p()),
        Method::POST,
        "/nodes/pve1/status",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").get_version(),
        Method::GET,
        "/nodes/pve1/version",
        None,
    );
    check(
        |api| api.nodes().node("pve1").get_syslog(&p()),
        Method::GET,
        "/nodes/pve1/syslog",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").get_tasks(&p()),
        Method::GET,
        "/nodes/pve1/tasks",
        Some(p()),
    );
}

#[test]
fn qemu() {
    check(
        |api| api.nodes().node("pve1").qemu().get(&p()),
        Method::GET,
        "/nodes/pve1/qemu/",
        Some(p()),
    );
    check(
        |api| api.nodes().node("pve1").qemu().post(&p()),
        Method::POST,
        "/nodes/pve1/qemu/",
        Some(p()),
    );

    check(|api| vm(api).get(), Method::GET, "/nodes/pve1/qemu/100/", None);
    check(
        |api| vm(api).delete(&p()),
        Method::DELETE,
        "/nodes/pve1/qemu/100/",
        Some(p()),
    );
    check(
        |api| vm(api).get_config(&p()),
        Method::GET,
        "/nodes/pve1/qemu/100/config",
        Some(p()),
    );
    check(
        |api| vm(api).post_config(&p()),
        Method::POST,
        "/nodes/pve1/qemu/100/config",
        Some(p()),
    );
    check(
        |api| vm(api).get_pending(),
        Method::GET,
        "/nodes/pve1/qemu/100/pending",
        None,
    );
    check(
        |api| vm(api).get_rrddata(&p()),
        Method::GET,
        "/nodes/pve1/qemu/100/rrddata",
        Some(p()),
    );
    check_call(
        |api| vm(api).rrd().get_with(&p()),
        Call::new(Method::GET, "/nodes/pve1/qemu/100/rrd/", Some(p())).format(ResponseFormat::Png),
    );
}

#[test]
fn lxc() {
    check(|api| api.nodes().node("pve1").lxc().get(), Method::GET, "/nodes/pve1/lxc/", None);
    check(
        |api| api.nodes().node("pve1").lxc().post(&p()),
        Method::POST,
        "/nodes/pve1/lxc/",
        Some(p()),
    );

    check(|api| ct(api).get(), Method::GET, "/nodes/pve1/lxc/101/", None);
    check(
        |api| ct(api).delete(&p()),
        Method::DELETE,
        "/nodes/pve1/lxc/101/",
        Some(p()),
    );
    check(
        |api| ct(api).put_config(&p()),
        Method::PUT,
        "/nodes/pve1/lxc/101/config",
        Some(p()),
    );
    check(
        |api| ct(api).get_pending(),
        Method::GET,
        "/nodes/pve1/lxc/101/pending",
        None,
    );
    check_call(
        |api| ct(api).rrd().get(),
        Call::new(Method::GET, "/nodes/pve1/lxc/101/rrd/", None).format(ResponseFormat::Png),
    );
    check(
        |api| ct(api).termproxy().post(&p()),
        Method::POST,
        "/nodes/pve1/lxc/101/termproxy/",
        Some(p()),
    );
}

#[test]
fn guest_status() {
    check(|api| status(api).get(), Method::GET, "/nodes/pve1/qemu/100/status/", None);
    check(
        |api| status(api).get_current(),
        Method::GET,
        "/nodes/pve1/qemu/100/status/current",
        None,
    );

    type Op = fn(&GuestStatus<&RecordingExecutor>, &Value) -> Result<Value, Error>;
    let actions: [(&str, Op); 7] = [
        ("start", |s, p| s.post_start(p)),
        ("stop", |s, p| s.post_stop(p)),
        ("shutdown", |s, p| s.post_shutdown(p)),
        ("reboot", |s, p| s.post_reboot(p)),
        ("reset", |s, p| s.post_reset(p)),
        ("suspend", |s, p| s.post_suspend(p)),
        ("resume", |s, p| s.post_resume(p)),
    ];
    for (action, op) in actions {
        check(
            |api| op(&status(api), &p()),
            Method::POST,
            &format!("/nodes/pve1/qemu/100/status/{action}"),
            Some(p()),
        );
    }

    check(
        |api| api.nodes().node("pve1").lxc().vmid(101).status().post_start(&p()),
        Method::POST,
        "/nodes/pve1/lxc/101/status/start",
        Some(p()),
    );
}

#[test]
fn node_ceph() {
    check(|api| ceph(api).get(), Method::GET, "/nodes/pve1/ceph/", None);
    check(|api| ceph(api).get_crush(), Method::GET, "/nodes/pve1/ceph/crush", None);
    check(|api| ceph(api).get_rules(), Method::GET, "/nodes/pve1/ceph/rules", None);
    check(|api| ceph(api).get_status(), Method::GET, "/nodes/pve1/ceph/status", None);
    check(
        |api| ceph(api).get_log(&p()),
        Method::GET,
        "/nodes/pve1/ceph/log",
        Some(p()),
    );
    check(
        |api| ceph(api).get_cmd_safety(&p()),
        Method::GET,
        "/nodes/pve1/ceph/cmd-safety",
        Some(p()),
    );
    check(
        |api| ceph(api).post_init(&p()),
        Method::POST,
        "/nodes/pve1/ceph/init",
        Some(p()),
    );
    check(
        |api| ceph(api).post_restart(&p()),
        Method::POST,
        "/nodes/pve1/ceph/restart",
        Some(p()),
    );
    check(
        |api| ceph(api).post_start(&p()),
        Method::POST,
        "/nodes/pve1/ceph/start",
        Some(p()),
    );
    check(
        |api| ceph(api).post_stop(&p()),
        Method::POST,
        "/nodes/pve1/ceph/stop",
        Some(p()),
    );

    check(|api| ceph(api).cfg().get(), Method::GET, "/nodes/pve1/ceph/cfg/", None);
    check(|api| ceph(api).cfg().get_raw(), Method::GET, "/nodes/pve1/ceph/cfg/raw", None);
    check(|api| ceph(api).cfg().get_db(), Method::GET, "/nodes/pve1/ceph/cfg/db", None);
    check(
        |api| ceph(api).cfg().get_value(&p()),
        Method::GET,
        "/nodes/pve1/ceph/cfg/value",
        Some(p()),
    );
}
