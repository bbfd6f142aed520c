use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use crate::macros::api_path;

api_path! {
    /// `/nodes/{node}/ceph/`
    pub struct Ceph;
}

impl<E: Clone> Ceph<E> {
    pub fn cfg(&self) -> CephCfg<E> {
        CephCfg::from_node(self.node.child("cfg"))
    }
}

impl<E: ApiExecutor> Ceph<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get OSD crush map.
    pub fn get_crush(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "crush", None::<&()>)
    }

    /// Read ceph log.
    pub fn get_log<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "log", Some(params))
    }

    /// List ceph rules.
    pub fn get_rules(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "rules", None::<&()>)
    }

    pub fn get_status(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "status", None::<&()>)
    }

    /// Heuristical check whether a service can be stopped or destroyed safely.
    pub fn get_cmd_safety<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "cmd-safety", Some(params))
    }

    /// Create initial ceph default configuration and setup symlinks.
    pub fn post_init<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "init", Some(params))
    }

    /// Restart ceph services.
    pub fn post_restart<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "restart", Some(params))
    }

    pub fn post_start<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "start", Some(params))
    }

    pub fn post_stop<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "stop", Some(params))
    }
}

api_path! {
    /// `/nodes/{node}/ceph/cfg/`
    pub struct CephCfg;
}

impl<E: ApiExecutor> CephCfg<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get the raw `ceph.conf` content.
    pub fn get_raw(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "raw", None::<&()>)
    }

    /// Get the ceph configuration database.
    pub fn get_db(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "db", None::<&()>)
    }

    /// Get configured values from the config file or the config database, selected by
    /// `config-keys`.
    pub fn get_value<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "value", Some(params))
    }
}
