use async_channel::{Receiver, Sender};
use parking_lot::Mutex;
use std::sync::OnceLock;

/// Шина сигналов обновления: действия публикуют сигнал,
/// смонтированные представления перечитывают своё состояние.
/// Доставка best-effort, без гарантий порядка.
pub struct RefreshBus {
    subscribers: Mutex<Vec<Sender<()>>>,
}

/// Подписка на шину. При Drop подписчик снимается с рассылки.
pub struct Subscription {
    receiver: Receiver<()>,
}

impl Subscription {
    /// Забирает накопившийся сигнал, если он есть
    pub fn try_recv(&self) -> bool {
        self.receiver.try_recv().is_ok()
    }
}

impl RefreshBus {
    fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Подписаться на сигналы обновления
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.lock().push(tx);
        Subscription { receiver: rx }
    }

    /// Опубликовать сигнал обновления всем живым подписчикам, без блокировки
    pub fn publish(&self) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| !tx.is_closed());
        for tx in subscribers.iter() {
            let _ = tx.try_send(());
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

/// Глобальная шина процесса
static REFRESH_BUS: OnceLock<RefreshBus> = OnceLock::new();

pub fn refresh_bus() -> &'static RefreshBus {
    REFRESH_BUS.get_or_init(RefreshBus::new)
}
