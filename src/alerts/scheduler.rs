use tokio::task::JoinHandle;

use super::{AUTO_DISMISS_AFTER, AlertCenter, AlertId, CLOSE_TRANSITION, ENTER_DELAY};

/// Enter, then auto-dismiss through the shared close path.
pub fn spawn_lifecycle(center: AlertCenter, id: AlertId) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(ENTER_DELAY).await;
        center.mark_visible(id);
        tokio::time::sleep(AUTO_DISMISS_AFTER.saturating_sub(ENTER_DELAY)).await;
        if center.close(id, false) {
            log::debug!("Alert {} auto-dismissed", id);
        }
    })
}

/// Drop the alert once its close transition is over.
pub fn spawn_removal(center: AlertCenter, id: AlertId) {
    tokio::spawn(async move {
        tokio::time::sleep(CLOSE_TRANSITION).await;
        center.remove(id);
    });
}
