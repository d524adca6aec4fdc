use std::time::Duration;

use log::debug;
use tokio::time::{Instant, interval_at, sleep};

use crate::types::{MockTimings, ProgressCallback, UploadProgress};

/// 模拟进度的总量
pub const PROGRESS_TOTAL: u64 = 100;

/// 定时器的最小间隔, 更小的配置值会被提升到这里
pub const MIN_PROGRESS_INTERVAL: Duration = Duration::from_millis(1);

/// 模拟一次上传
///
/// 进度定时器和完成延迟是两个独立的任务, 在同一个作用域内并行等待。
/// 函数只会在两者都结束后返回: 定时器不会比本次调用活得更久,
/// 返回时间也不会早于完成延迟。
pub async fn simulate_upload(timings: &MockTimings, on_progress: Option<ProgressCallback>) {
    let ticker = async {
        if let Some(callback) = on_progress {
            tick_progress(timings.progress_interval, timings.progress_step, callback).await;
        }
    };

    tokio::join!(ticker, sleep(timings.completion_delay));
}

/// 按固定间隔递增进度, 达到总量后结束
async fn tick_progress(period: Duration, step: u64, callback: ProgressCallback) {
    let step = step.max(1);
    let period = period.max(MIN_PROGRESS_INTERVAL);
    // 第一次触发在一个间隔之后, 而不是立即触发
    let mut ticker = interval_at(Instant::now() + period, period);
    let mut loaded = 0;

    while loaded < PROGRESS_TOTAL {
        ticker.tick().await;
        loaded = (loaded + step).min(PROGRESS_TOTAL);
        callback(UploadProgress {
            loaded,
            total: PROGRESS_TOTAL,
        });
    }

    debug!("模拟上传进度已完成");
}
