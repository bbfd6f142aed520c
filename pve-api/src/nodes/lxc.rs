use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error};

use super::guest::{GuestStatus, Rrd};
use crate::firewall::Firewall;
use crate::macros::api_path;

api_path! {
    /// `/nodes/{node}/lxc/`
    pub struct Lxc;
}

impl<E: Clone> Lxc<E> {
    pub fn vmid(&self, vmid: u32) -> LxcVm<E> {
        LxcVm::from_node(self.node.child(vmid))
    }
}

impl<E: ApiExecutor> Lxc<E> {
    /// LXC container index (per node).
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Create or restore a container.
    pub fn post<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.post(params)
    }
}

api_path! {
    /// `/nodes/{node}/lxc/{vmid}/`
    pub struct LxcVm;
}

impl<E: Clone> LxcVm<E> {
    pub fn rrd(&self) -> Rrd<E> {
        Rrd::from_node(self.node.child("rrd"))
    }

    pub fn status(&self) -> GuestStatus<E> {
        GuestStatus::from_node(self.node.child("status"))
    }

    pub fn firewall(&self) -> Firewall<E> {
        Firewall::from_node(self.node.child("firewall"))
    }

    pub fn termproxy(&self) -> Termproxy<E> {
        Termproxy::from_node(self.node.child("termproxy"))
    }
}

impl<E: ApiExecutor> LxcVm<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Destroy the container (also delete all used files).
    pub fn delete<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.delete_with(params)
    }

    pub fn get_config<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "config", Some(params))
    }

    /// Set container options.
    pub fn put_config<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::PUT, "config", Some(params))
    }

    pub fn get_pending(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "pending", None::<&()>)
    }

    /// Read container RRD statistics.
    pub fn get_rrddata<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::GET, "rrddata", Some(params))
    }
}

api_path! {
    /// `/nodes/{node}/lxc/{vmid}/termproxy/`
    pub struct Termproxy;
}

impl<E: ApiExecutor> Termproxy<E> {
    /// Creates a TCP proxy connection. The result carries the `port`, `ticket` and `user` for
    /// the subsequent websocket upgrade.
    pub fn post<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.post(params)
    }
}
