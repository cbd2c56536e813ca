use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone)]
pub enum CacheResult<T> {
    /// 确定不存在
    NotFound,
    /// 存在但没有取到值（后端异常等）
    ExistsButNoValue,
    /// 成功获取到缓存值
    Found(T),
}

/// 对象缓存后端：统一以字符串键值存取，调用方负责序列化
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
