mod redis_keys;
