//! Tag presence notifications for the companion RFID click.
//!
//! This module only defines the event payloads and their delivery. Whatever loop polls the
//! reader decides when a tag counts as detected or removed and hands the result to
//! [`TagNotifier::publish`].
//!
//! # Examples
//!
//! ```rust
//! use adc_click::event::{TagEvent, TagInfo, TagNotifier};
//!
//! let mut seen = 0u32;
//! let mut on_event = |event: &TagEvent| {
//!     if let TagEvent::Detected(info) = event {
//!         seen = info.tag_id();
//!     }
//! };
//!
//! let mut notifier: TagNotifier<'_, 2> = TagNotifier::new();
//! notifier.subscribe(&mut on_event).unwrap();
//! notifier.set_detection_enabled(true);
//! notifier.publish(TagEvent::Detected(TagInfo::new(0xDEAD_BEEF, 0x5A)));
//! drop(notifier);
//! assert_eq!(seen, 0xDEAD_BEEF);
//! ```

use core::fmt;

/// Length of the `xx:yy:zz:tt` rendering of a tag identifier.
pub const TAG_HEX_LEN: usize = 11;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Identification data carried by every tag notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagInfo {
    tag_id: u32,
    crc: u8,
}

impl TagInfo {
    /// Creates the payload for a tag.
    pub const fn new(tag_id: u32, crc: u8) -> Self {
        Self { tag_id, crc }
    }

    /// 32-bit tag identifier.
    pub const fn tag_id(&self) -> u32 {
        self.tag_id
    }

    /// Checksum byte reported alongside the identifier.
    pub const fn crc(&self) -> u8 {
        self.crc
    }

    /// Identifier rendered as `xx:yy:zz:tt`, most significant byte first.
    pub fn tag_id_hex(&self) -> TagIdHex {
        TagIdHex::from_id(self.tag_id)
    }
}

/// Fixed-size, lowercase `xx:yy:zz:tt` rendering of a tag identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagIdHex([u8; TAG_HEX_LEN]);

impl TagIdHex {
    fn from_id(id: u32) -> Self {
        let mut text = [b':'; TAG_HEX_LEN];
        for (i, byte) in id.to_be_bytes().iter().enumerate() {
            text[i * 3] = HEX_DIGITS[(byte >> 4) as usize];
            text[i * 3 + 1] = HEX_DIGITS[(byte & 0x0F) as usize];
        }
        Self(text)
    }

    /// Borrows the rendering as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits and ':' are ever written.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for TagIdHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TagIdHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TagIdHex").field(&self.as_str()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TagIdHex {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Tag presence change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TagEvent {
    /// A tag entered the reader field.
    Detected(TagInfo),
    /// A previously detected tag left the reader field.
    Removed(TagInfo),
}

impl TagEvent {
    /// Payload shared by both variants.
    pub const fn info(&self) -> &TagInfo {
        match self {
            Self::Detected(info) | Self::Removed(info) => info,
        }
    }
}

/// Receiver of tag notifications.
pub trait TagListener {
    /// Called for every published event while detection is enabled.
    fn on_event(&mut self, event: &TagEvent);
}

impl<F> TagListener for F
where
    F: FnMut(&TagEvent),
{
    fn on_event(&mut self, event: &TagEvent) {
        self(event)
    }
}

/// Handle returned by [`TagNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubscriptionId(usize);

/// Registration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventError {
    /// All `N` listener slots are taken.
    RegistryFull,
    /// The id does not refer to a live subscription.
    UnknownSubscription,
}

/// Fixed-capacity registry of up to `N` tag listeners with a detection on/off toggle.
pub struct TagNotifier<'a, const N: usize> {
    listeners: [Option<&'a mut dyn TagListener>; N],
    detection_enabled: bool,
}

impl<'a, const N: usize> TagNotifier<'a, N> {
    /// Creates an empty registry with detection disabled.
    pub fn new() -> Self {
        Self {
            listeners: core::array::from_fn(|_| None),
            detection_enabled: false,
        }
    }

    /// Registers a listener in the first free slot.
    pub fn subscribe(
        &mut self,
        listener: &'a mut dyn TagListener,
    ) -> core::result::Result<SubscriptionId, EventError> {
        let slot = self
            .listeners
            .iter()
            .position(Option::is_none)
            .ok_or(EventError::RegistryFull)?;
        self.listeners[slot] = Some(listener);
        debug!("tag listener subscribed in slot {}", slot);
        Ok(SubscriptionId(slot))
    }

    /// Removes a listener, handing the borrow back to the caller.
    pub fn unsubscribe(
        &mut self,
        id: SubscriptionId,
    ) -> core::result::Result<&'a mut dyn TagListener, EventError> {
        self.listeners
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(EventError::UnknownSubscription)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` when no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turns delivery on or off.
    pub fn set_detection_enabled(&mut self, enabled: bool) {
        self.detection_enabled = enabled;
    }

    /// Whether events are currently delivered.
    pub fn is_detection_enabled(&self) -> bool {
        self.detection_enabled
    }

    /// Delivers `event` to every listener in registration-slot order.
    ///
    /// Returns the number of listeners notified, `0` when detection is disabled.
    pub fn publish(&mut self, event: TagEvent) -> usize {
        if !self.detection_enabled {
            trace!("tag event dropped, detection disabled");
            return 0;
        }

        let mut delivered = 0;
        for listener in self.listeners.iter_mut().flatten() {
            listener.on_event(&event);
            delivered += 1;
        }
        delivered
    }
}

impl<const N: usize> Default for TagNotifier<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
