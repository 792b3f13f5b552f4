mod event_channel_tests;
mod monitor_flow_tests;
