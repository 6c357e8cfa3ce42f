mod audit_log;
