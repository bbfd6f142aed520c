//! Endpoints shared by virtual machines and containers.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use pve_client::{ApiExecutor, Error, ResponseFormat};

use crate::macros::api_path;

api_path! {
    /// `.../{vmid}/status/`
    pub struct GuestStatus;
}

impl<E: ApiExecutor> GuestStatus<E> {
    /// Directory index.
    pub fn get(&self) -> Result<Value, Error> {
        self.node.get()
    }

    /// Get virtual machine or container status.
    pub fn get_current(&self) -> Result<Value, Error> {
        self.node.call(Method::GET, "current", None::<&()>)
    }

    pub fn post_start<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "start", Some(params))
    }

    /// Stop immediately, without a clean shutdown.
    pub fn post_stop<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "stop", Some(params))
    }

    /// Clean shutdown through ACPI or the container's init.
    pub fn post_shutdown<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "shutdown", Some(params))
    }

    pub fn post_reboot<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "reboot", Some(params))
    }

    /// Reset a virtual machine. Containers have no such route.
    pub fn post_reset<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "reset", Some(params))
    }

    pub fn post_suspend<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "suspend", Some(params))
    }

    pub fn post_resume<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, Error> {
        self.node.call(Method::POST, "resume", Some(params))
    }
}

api_path! {
    /// `.../{vmid}/rrd/`, statistics rendered as a PNG image.
    pub struct Rrd;
}

impl<E: ApiExecutor> Rrd<E> {
    /// Fetch the graph with the server's default parameters.
    ///
    /// The request asks for the `png` output format. A JSON answer is reported as
    /// [`Error::BadApi`] rather than handed out as image data.
    pub fn get(&self) -> Result<Vec<u8>, Error> {
        self.node
            .get_raw(ResponseFormat::Png, None::<&()>)?
            .into_binary()
    }

    /// Fetch the graph, see [`RrdParams`](crate::types::RrdParams).
    pub fn get_with<P: Serialize + ?Sized>(&self, params: &P) -> Result<Vec<u8>, Error> {
        self.node
            .get_raw(ResponseFormat::Png, Some(params))?
            .into_binary()
    }
}
