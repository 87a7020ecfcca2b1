//! Object user resource client
//!
//! All object user endpoints speak JSON.

use std::sync::Arc;

use async_trait::async_trait;
use osc_core::model::{
    ObjectUserInfo, ObjectUserList, ObjectUserSecret, ObjectUserSecretKeyCreateReq,
    ObjectUserSecretKeyCreateRes, ObjectUserSecretKeyDeleteReq,
};
use osc_core::{ObjectUserApi, Params, Result};

use crate::client::{Body, RemoteCaller, RemoteCallerExt, Request, path_join};

#[derive(Clone)]
pub struct ObjectUser {
    caller: Arc<dyn RemoteCaller>,
}

impl ObjectUser {
    pub fn new(caller: Arc<dyn RemoteCaller>) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl ObjectUserApi for ObjectUser {
    async fn list(&self, params: &Params) -> Result<ObjectUserList> {
        self.caller
            .call_into(Request::get("/object/users").json().params(params))
            .await
    }

    async fn get_info(&self, uid: &str, params: &Params) -> Result<ObjectUserInfo> {
        let path = path_join(["object", "users", uid, "info"]);
        self.caller
            .call_into(Request::get(path).json().params(params))
            .await
    }

    async fn get_secret(&self, uid: &str, params: &Params) -> Result<ObjectUserSecret> {
        let path = path_join(["object", "user-secret-keys", uid]);
        self.caller
            .call_into(Request::get(path).json().params(params))
            .await
    }

    async fn create_secret(
        &self,
        uid: &str,
        req: &ObjectUserSecretKeyCreateReq,
        params: &Params,
    ) -> Result<ObjectUserSecretKeyCreateRes> {
        let path = path_join(["object", "user-secret-keys", uid]);
        let request = Request::post(path)
            .json()
            .params(params)
            .body(Body::json(req)?);
        self.caller.call_into(request).await
    }

    async fn delete_secret(
        &self,
        uid: &str,
        req: &ObjectUserSecretKeyDeleteReq,
        params: &Params,
    ) -> Result<()> {
        let path = path_join(["object", "user-secret-keys", uid, "deactivate"]);
        let request = Request::post(path)
            .json()
            .params(params)
            .body(Body::json(req)?);
        self.caller.call(request).await
    }
}
